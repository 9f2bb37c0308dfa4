//! 服务层模块
//!
//! 包含算法服务、引擎门面与结果呈现模块

pub mod algorithm;
pub mod engine;
pub mod report;

// 重新导出常用服务
pub use algorithm::*;
pub use report::ReportFormatter;
