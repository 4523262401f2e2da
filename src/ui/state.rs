//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use super::router::{Router, ViewMode};
use crate::models::{Conversation, RideListing, RIDE_LISTINGS};
use crate::offer::{OfferField, OfferForm};
use crate::store::ProfileRecord;

/// 应用状态
pub struct App {
    pub router: Router,
    pub mode: InputMode,
    pub selected_index: usize,
    pub search: String,
    pub input_buffer: String,
    pub offer: OfferForm,
    pub offer_focus: usize, // index into OfferField::ALL
    pub clock: String,
    pub profiles: RemoteProfiles,
    pub fetch_requested: bool,
    pub message: Option<String>,
}

/// 输入模式
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Searching,
    EditingField(OfferField),
}

/// 远程个人资料加载状态
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteProfiles {
    NotConfigured,
    Loading,
    Loaded(Vec<ProfileRecord>),
    Failed(String),
    Unavailable(String), // 客户端无法创建，不会再请求
}

impl App {
    /// 创建新的应用实例；配置了远程存储时立即请求一次加载
    pub fn new(conversations: &'static [Conversation], store_configured: bool) -> Self {
        Self {
            router: Router::new(conversations),
            mode: InputMode::Normal,
            selected_index: 0,
            search: String::new(),
            input_buffer: String::new(),
            offer: OfferForm::default(),
            offer_focus: 0,
            clock: String::new(),
            profiles: if store_configured {
                RemoteProfiles::Loading
            } else {
                RemoteProfiles::NotConfigured
            },
            fetch_requested: store_configured,
            message: None,
        }
    }

    /// 存储已配置但客户端创建失败：界面照常启动，错误显示在 Profile 页面
    pub fn with_store_error(conversations: &'static [Conversation], error: String) -> Self {
        let mut app = Self::new(conversations, false);
        app.profiles = RemoteProfiles::Unavailable(error);
        app
    }

    pub fn view(&self) -> ViewMode {
        self.router.current_view()
    }

    /// 按搜索条件过滤后的会话列表
    pub fn visible_conversations(&self) -> Vec<&'static Conversation> {
        self.router
            .conversations()
            .iter()
            .filter(|c| c.matches(&self.search))
            .collect()
    }

    /// 按搜索条件过滤后的行程列表
    pub fn visible_rides(&self) -> Vec<&'static RideListing> {
        RIDE_LISTINGS
            .iter()
            .filter(|r| r.matches(&self.search))
            .collect()
    }

    /// 当前页面可选列表的长度
    pub fn list_len(&self) -> usize {
        match self.view() {
            ViewMode::Messages if self.router.selected_conversation().is_none() => {
                self.visible_conversations().len()
            }
            ViewMode::FindRide => self.visible_rides().len(),
            _ => 0,
        }
    }

    pub fn focused_field(&self) -> OfferField {
        OfferField::ALL[self.offer_focus.min(OfferField::ALL.len() - 1)]
    }

    /// 主循环取走加载请求
    pub fn take_fetch_request(&mut self) -> bool {
        std::mem::take(&mut self.fetch_requested)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.list_len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}
