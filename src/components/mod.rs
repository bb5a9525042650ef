//! UI Components
//!
//! One component per widget on the page.

mod burning_timer;
mod exchange_calculator;
mod history_table;
mod todo_list;

pub use burning_timer::BurningTimerPanel;
pub use exchange_calculator::ExchangeCalculator;
pub use history_table::HistoryTable;
pub use todo_list::TodoList;
