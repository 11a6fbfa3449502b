/// 20-byte EVM account or contract address.
pub type Address = [u8; 20];

/// Storage representation of a collection contract kind.
pub type ContractType = i8;

/// EVM chain identifier.
pub type ChainId = u64;
