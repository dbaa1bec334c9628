pub mod day_state;
pub mod field;
pub mod kilometers;
pub mod slot;
pub mod times;

pub use day_state::DayState;
pub use field::Field;
pub use kilometers::Kilometers;
pub use slot::{KmColumn, Slot, TimeColumn};
pub use times::{TimeRow, Times};
