pub mod record;
pub mod resolve;
