pub mod callback_wrap;
pub mod fallback_dispatch;
pub mod scenarios;
