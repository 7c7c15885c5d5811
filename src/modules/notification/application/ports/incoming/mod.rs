pub mod notify;

pub use notify::{INotifyUseCase, NotifyCommand, NotifyError};
