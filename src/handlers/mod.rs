pub mod health;
pub mod enhancer_handlers;
