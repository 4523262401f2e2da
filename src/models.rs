//! 静态示例数据
//!
//! 会话、行程、个人资料全部是只读的 `'static` 数据

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

/// 单条聊天消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: &'static str,
    pub text: &'static str,
    pub sender: Sender,
}

/// 会话（聊天室）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: &'static str,
    pub name: &'static str,
    pub last_message: &'static str,
    pub time: &'static str,
    pub unread: bool,
    pub messages: &'static [Message],
}

impl Conversation {
    /// 按名称或最后一条消息匹配（不区分大小写）
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.name, query) || contains_ignore_case(self.last_message, query)
    }
}

/// 首页活动状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Confirmed,
    Pending,
}

/// 首页 "Your Activity" 条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub when: &'static str,
    pub route: &'static str,
    pub status: ActivityStatus,
    pub with: &'static str,
}

/// 行程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStatus {
    Available,
    Full,
    Expired,
}

impl RideStatus {
    pub fn label(self) -> &'static str {
        match self {
            RideStatus::Available => "Available",
            RideStatus::Full => "Full",
            RideStatus::Expired => "Expired",
        }
    }
}

/// 可搭乘的行程
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideListing {
    pub id: &'static str,
    pub driver: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: RideStatus,
}

impl RideListing {
    /// 按出发地、目的地或司机匹配
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.from, query)
            || contains_ignore_case(self.to, query)
            || contains_ignore_case(self.driver, query)
    }
}

/// 当前用户资料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub unit: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub bio: &'static str,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub static CONVERSATIONS: &[Conversation] = &[
    Conversation {
        id: "1",
        name: "Train Station Ride",
        last_message: "See you at 4!",
        time: "4:05 PM",
        unread: true,
        messages: &[
            Message {
                id: "m1",
                text: "Hey John, I'm ready when you are.",
                sender: Sender::Me,
            },
            Message {
                id: "m2",
                text: "Great, I'll be downstairs in 5 minutes.",
                sender: Sender::Other,
            },
            Message {
                id: "m3",
                text: "Sounds good!",
                sender: Sender::Me,
            },
        ],
    },
    Conversation {
        id: "2",
        name: "Grocery Shopping",
        last_message: "I need milk and bread.",
        time: "Yesterday",
        unread: false,
        messages: &[
            Message {
                id: "m4",
                text: "I'm heading to the store, need anything?",
                sender: Sender::Me,
            },
            Message {
                id: "m5",
                text: "Yes, could you grab some milk and bread please?",
                sender: Sender::Other,
            },
            Message {
                id: "m6",
                text: "Sure thing, on it!",
                sender: Sender::Me,
            },
        ],
    },
    Conversation {
        id: "3",
        name: "Building General",
        last_message: "Remember the building meeting.",
        time: "Mon",
        unread: true,
        messages: &[
            Message {
                id: "m7",
                text: "Anyone going to the building meeting on Wednesday?",
                sender: Sender::Other,
            },
            Message {
                id: "m8",
                text: "I am! See you there.",
                sender: Sender::Me,
            },
        ],
    },
];

pub static ACTIVITY: &[ActivityItem] = &[
    ActivityItem {
        when: "Today, 4:00 PM",
        route: "Train Station to Apartment",
        status: ActivityStatus::Confirmed,
        with: "with John Doe",
    },
    ActivityItem {
        when: "Tomorrow, 9:00 AM",
        route: "Apartment to Grocery Store",
        status: ActivityStatus::Pending,
        with: "(Carpool)",
    },
];

pub static RIDE_LISTINGS: &[RideListing] = &[
    RideListing {
        id: "1",
        driver: "Jane Smith",
        from: "Apartment",
        to: "Train Station",
        date: "Today",
        time: "5:15 PM",
        status: RideStatus::Available,
    },
    RideListing {
        id: "2",
        driver: "Mike Johnson",
        from: "Apartment",
        to: "Grocery Store",
        date: "Tomorrow",
        time: "10:00 AM",
        status: RideStatus::Full,
    },
    RideListing {
        id: "3",
        driver: "Sarah Lee",
        from: "Train Station",
        to: "Apartment",
        date: "Today",
        time: "6:30 PM",
        status: RideStatus::Available,
    },
    RideListing {
        id: "4",
        driver: "David Chen",
        from: "Apartment",
        to: "Bus Stop",
        date: "Tomorrow",
        time: "8:00 AM",
        status: RideStatus::Expired,
    },
];

pub static CURRENT_USER: UserProfile = UserProfile {
    name: "John Doe",
    unit: "Apartment 4B",
    email: "john.doe@example.com",
    phone: "(555) 123-4567",
    bio: "Friendly neighbor looking to help out with rides and errands!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_ids_are_unique() {
        let mut ids: Vec<&str> = CONVERSATIONS.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CONVERSATIONS.len());
    }

    #[test]
    fn test_conversation_matches() {
        let room = &CONVERSATIONS[1];
        assert!(room.matches("grocery"));
        assert!(room.matches("MILK"));
        assert!(room.matches(""));
        assert!(!room.matches("train"));
    }

    #[test]
    fn test_ride_listing_matches() {
        let ride = &RIDE_LISTINGS[3];
        assert!(ride.matches("bus"));
        assert!(ride.matches("david"));
        assert!(!ride.matches("grocery"));
    }
}
