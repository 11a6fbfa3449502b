pub mod contract_manager;
pub mod contract_state;
pub mod state_pg;
pub mod state_rock;
