pub mod dashboard;
pub mod lottery;
pub mod pay;
pub mod translate;

pub use dashboard::{handle_dashboard_command, DashboardCommands};
pub use lottery::{handle_lottery_command, LotteryCommands};
pub use pay::{handle_pay_command, PayCommands};
pub use translate::handle_translate;
