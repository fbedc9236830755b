//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, navigation.rs): App 结构体与视图状态机
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs, input.rs): 用户交互转化为明确的语义化 Action
//! - Update (logic.rs): Action -> 状态转移 / Command

pub mod actions;
pub mod input;
pub mod logic;
pub mod navigation;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::Command;
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
