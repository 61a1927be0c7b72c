pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod peripherals;
mod result;
pub mod services;
pub mod terminal;
pub mod transactions;

#[cfg(test)]
mod testing;

pub use money::{Money, MoneyError};
pub use result::Result;
pub use terminal::Terminal;

use peripherals::{BillCashDispenser, ConsoleKeypad, ConsoleScreen, SimulatedDepositSlot};
use services::InMemoryBankDatabase;

use std::io::{BufRead, Write};

/// Terminal wired to console peripherals, a stocked dispenser and the simulated deposit slot
pub type ConsoleTerminal<R, W> = Terminal<
    ConsoleScreen<W>,
    ConsoleKeypad<R>,
    InMemoryBankDatabase,
    BillCashDispenser,
    SimulatedDepositSlot,
>;

pub fn build_console_terminal<R: BufRead, W: Write>(
    input: R,
    output: W,
    bank_database: InMemoryBankDatabase,
) -> ConsoleTerminal<R, W> {
    let terminal = Terminal::new(
        ConsoleScreen::new(output),
        ConsoleKeypad::new(input),
        bank_database,
        BillCashDispenser::new(),
        SimulatedDepositSlot,
    );

    return terminal;
}
