mod cash_dispenser;
mod deposit_slot;
mod keypad;
mod screen;

pub use cash_dispenser::{BillCashDispenser, CashDispenser, DispenserError};
pub use deposit_slot::{DepositSlot, SimulatedDepositSlot};
pub use keypad::{ConsoleKeypad, Keypad, KeypadError};
pub use screen::{ConsoleScreen, Screen};
