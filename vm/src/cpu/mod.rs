mod machine;
mod registers;

pub use machine::{Action, BoothMachine, Phase};
pub use registers::RegisterState;
