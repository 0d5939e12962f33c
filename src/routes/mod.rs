pub mod contact;
pub mod health;
pub mod plays;
pub mod torneos;
