//! 解析サーバ連携

mod analyze;

pub use analyze::{build_form_data, submit};
