//! Action 枚举定义 (Intent)
//!
//! 用户交互与后台任务结果都转化为明确的语义化 Action

use super::router::ViewMode;
use crate::store::ProfileRecord;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 标签栏
    Navigate(ViewMode),
    NextTab,
    PrevTab,

    // 列表 / 表单焦点
    MoveSelectionUp,
    MoveSelectionDown,
    Activate, // Enter / Space
    Back,     // Esc
    StartSearch,

    // 首页快捷按钮
    ViewAllRides,
    StartNewChat,

    // 发布行程表单
    AddSeat,
    RemoveSeat,

    RefreshProfiles,

    // 文本输入
    Cancel,
    Submit,
    Input(char),
    DeleteChar,

    // 后台任务
    ClockTick(String),
    ProfilesLoaded(Result<Vec<ProfileRecord>, String>),
}
