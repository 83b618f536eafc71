//! NagarSetu Workforce Core - 市政人力管理核心
//!
//! Domain engine behind the role-based municipal dashboards: attendance,
//! grievances, payroll, notifications, vacancies and department statistics.
//! All state lives in process memory; the only durable artifact is the
//! cached login session.
//!
//! # 模块结构
//!
//! ```text
//! setu-core/src/
//! ├── store/        # WorkforceStore - mutable collections + reference data
//! ├── session/      # login/logout + file-backed session cache
//! ├── stats.rs      # derived aggregation views (stateless)
//! ├── assistant.rs  # canned-response chat assistant
//! ├── events.rs     # store change broadcasts
//! ├── config.rs     # environment configuration
//! └── utils/        # logger, validation helpers
//! ```

pub mod assistant;
pub mod config;
pub mod events;
pub mod session;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use assistant::Assistant;
pub use config::CoreConfig;
pub use events::StoreEvent;
pub use session::{LoginResponse, SessionManager};
pub use store::WorkforceStore;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
