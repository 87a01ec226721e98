pub use chip8::Chip8;
pub use constants::CLOCK_SPEED;

mod chip8;
pub mod constants;
mod dispatch;
mod opcode;
mod operations;
pub mod state;
