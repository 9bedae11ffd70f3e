pub mod router;
pub mod types;
pub mod handlers {
    pub mod health;
    pub mod index;
    pub mod verify;
}

pub use router::create_router;
pub use types::AppState;
