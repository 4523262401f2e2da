//! 页面路由
//!
//! 持有当前页面 (ViewMode) 与当前打开的会话，是唯一的导航状态来源

use log::debug;

use crate::models::Conversation;

/// 顶层页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    Messages,
    OfferRide,
    FindRide,
    Profile,
}

impl ViewMode {
    /// 底部标签栏顺序
    pub const ALL: [ViewMode; 5] = [
        ViewMode::Home,
        ViewMode::Messages,
        ViewMode::OfferRide,
        ViewMode::FindRide,
        ViewMode::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Home => "Home",
            ViewMode::Messages => "Messages",
            ViewMode::OfferRide => "Offer Ride",
            ViewMode::FindRide => "Find Ride",
            ViewMode::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewMode::Home => 0,
            ViewMode::Messages => 1,
            ViewMode::OfferRide => 2,
            ViewMode::FindRide => 3,
            ViewMode::Profile => 4,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 路由状态：当前页面 + 当前会话
#[derive(Debug, Clone)]
pub struct Router {
    view: ViewMode,
    selected: Option<&'static Conversation>,
    conversations: &'static [Conversation],
}

impl Router {
    pub fn new(conversations: &'static [Conversation]) -> Self {
        Self {
            view: ViewMode::Home,
            selected: None,
            conversations,
        }
    }

    pub fn current_view(&self) -> ViewMode {
        self.view
    }

    pub fn selected_conversation(&self) -> Option<&'static Conversation> {
        self.selected
    }

    pub fn conversations(&self) -> &'static [Conversation] {
        self.conversations
    }

    /// 切换页面；离开 Messages 时清除已打开的会话
    pub fn navigate(&mut self, target: ViewMode) {
        self.view = target;
        if target != ViewMode::Messages {
            self.selected = None;
        }
    }

    /// 打开会话，仅在 Messages 页面有效；未知 id 直接忽略
    pub fn open_conversation(&mut self, id: &str) {
        if self.view != ViewMode::Messages {
            debug!("ignoring open_conversation({id}) outside Messages");
            return;
        }
        match self.conversations.iter().find(|c| c.id == id) {
            Some(conversation) => {
                debug!(
                    "opened conversation {id} ({} messages, last {:?})",
                    conversation.messages.len(),
                    conversation.messages.last().map(|m| m.id)
                );
                self.selected = Some(conversation);
            }
            None => debug!("unknown conversation id {id}"),
        }
    }

    /// 返回会话列表
    pub fn close_conversation(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CONVERSATIONS;

    fn selected_id(router: &Router) -> Option<&'static str> {
        router.selected_conversation().map(|c| c.id)
    }

    #[test]
    fn test_initial_state() {
        let router = Router::new(CONVERSATIONS);
        assert_eq!(router.current_view(), ViewMode::Home);
        assert!(router.selected_conversation().is_none());
    }

    #[test]
    fn test_navigate_to_every_view() {
        let mut router = Router::new(CONVERSATIONS);
        for view in ViewMode::ALL {
            router.navigate(view);
            assert_eq!(router.current_view(), view);
        }
    }

    #[test]
    fn test_leaving_messages_clears_conversation() {
        let mut router = Router::new(CONVERSATIONS);
        router.navigate(ViewMode::Messages);
        router.open_conversation("2");
        assert_eq!(selected_id(&router), Some("2"));

        router.navigate(ViewMode::Home);
        assert!(router.selected_conversation().is_none());

        router.navigate(ViewMode::Messages);
        assert!(router.selected_conversation().is_none());
    }

    #[test]
    fn test_renavigating_to_messages_keeps_conversation() {
        let mut router = Router::new(CONVERSATIONS);
        router.navigate(ViewMode::Messages);
        router.open_conversation("3");
        router.navigate(ViewMode::Messages);
        assert_eq!(selected_id(&router), Some("3"));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut router = Router::new(CONVERSATIONS);
        router.navigate(ViewMode::Messages);
        router.open_conversation("missing");
        assert!(router.selected_conversation().is_none());

        router.open_conversation("1");
        router.open_conversation("missing");
        assert_eq!(selected_id(&router), Some("1"));
    }

    #[test]
    fn test_open_outside_messages_is_ignored() {
        let mut router = Router::new(CONVERSATIONS);
        router.open_conversation("1");
        assert!(router.selected_conversation().is_none());
        assert_eq!(router.current_view(), ViewMode::Home);
    }

    #[test]
    fn test_open_then_close_scenario() {
        let mut router = Router::new(CONVERSATIONS);
        assert_eq!((router.current_view(), selected_id(&router)), (ViewMode::Home, None));

        router.navigate(ViewMode::Messages);
        assert_eq!((router.current_view(), selected_id(&router)), (ViewMode::Messages, None));

        router.open_conversation("1");
        assert_eq!(
            (router.current_view(), selected_id(&router)),
            (ViewMode::Messages, Some("1"))
        );

        router.close_conversation();
        assert_eq!((router.current_view(), selected_id(&router)), (ViewMode::Messages, None));
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(ViewMode::Profile.next(), ViewMode::Home);
        assert_eq!(ViewMode::Home.prev(), ViewMode::Profile);
        assert_eq!(ViewMode::Messages.next(), ViewMode::OfferRide);
    }
}
