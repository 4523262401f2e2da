//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use log::{info, warn};

use super::actions::Action;
use super::router::ViewMode;
use super::state::{App, InputMode, RemoteProfiles};
use crate::offer::{OfferField, OfferForm};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Navigate(view) => self.navigate(view),
            Action::NextTab => self.navigate(self.view().next()),
            Action::PrevTab => self.navigate(self.view().prev()),

            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::Activate => self.activate(),
            Action::Back => self.back(),
            Action::StartSearch => self.start_search(),

            Action::ViewAllRides => self.navigate(ViewMode::FindRide),
            Action::StartNewChat => self.navigate(ViewMode::Messages),

            Action::AddSeat => {
                if self.view() == ViewMode::OfferRide {
                    self.offer.add_seat();
                }
            }
            Action::RemoveSeat => {
                if self.view() == ViewMode::OfferRide {
                    self.offer.remove_seat();
                }
            }

            Action::RefreshProfiles => self.refresh_profiles(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit_input(),

            Action::Input(c) => match self.mode {
                InputMode::Searching => {
                    self.search.push(c);
                    self.clamp_selection();
                }
                InputMode::EditingField(_) => self.input_buffer.push(c),
                InputMode::Normal => {}
            },

            Action::DeleteChar => match self.mode {
                InputMode::Searching => {
                    self.search.pop();
                    self.clamp_selection();
                }
                InputMode::EditingField(_) => {
                    self.input_buffer.pop();
                }
                InputMode::Normal => {}
            },

            Action::ClockTick(time) => self.clock = time,
            Action::ProfilesLoaded(result) => self.profiles_loaded(result),
        }
        false
    }

    // ============ 导航相关 ============

    /// 切换标签页，重置列表状态
    pub fn navigate(&mut self, view: ViewMode) {
        self.router.navigate(view);
        self.mode = InputMode::Normal;
        self.selected_index = 0;
        self.search.clear();
        self.input_buffer.clear();
        self.message = None;
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.view() == ViewMode::OfferRide {
            self.offer_focus = self.offer_focus.saturating_sub(1);
        } else if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.view() == ViewMode::OfferRide {
            if self.offer_focus + 1 < OfferField::ALL.len() {
                self.offer_focus += 1;
            }
        } else if self.selected_index + 1 < self.list_len() {
            self.selected_index += 1;
        }
    }

    /// Enter / Space
    pub fn activate(&mut self) {
        match self.view() {
            ViewMode::Messages if self.router.selected_conversation().is_none() => {
                let target = self
                    .visible_conversations()
                    .get(self.selected_index)
                    .map(|c| c.id);
                if let Some(id) = target {
                    self.router.open_conversation(id);
                    self.message = None;
                }
            }
            ViewMode::FindRide => {
                if let Some(ride) = self.visible_rides().get(self.selected_index) {
                    self.message = Some(format!(
                        "Ride #{}: {} from {} to {}, {} {} ({})",
                        ride.id,
                        ride.driver,
                        ride.from,
                        ride.to,
                        ride.date,
                        ride.time,
                        ride.status.label()
                    ));
                }
            }
            ViewMode::OfferRide => self.activate_offer_field(),
            _ => {}
        }
    }

    /// Esc：关闭会话，或清除搜索条件
    pub fn back(&mut self) {
        if self.router.selected_conversation().is_some() {
            self.router.close_conversation();
        } else if !self.search.is_empty() {
            self.search.clear();
            self.clamp_selection();
        }
    }

    // ============ 搜索相关 ============

    /// 开始搜索（仅限列表页面）
    pub fn start_search(&mut self) {
        let searchable = match self.view() {
            ViewMode::Messages => self.router.selected_conversation().is_none(),
            ViewMode::FindRide => true,
            _ => false,
        };
        if searchable {
            self.mode = InputMode::Searching;
            self.selected_index = 0;
        }
    }

    // ============ 发布行程相关 ============

    fn activate_offer_field(&mut self) {
        let field = self.focused_field();
        match field {
            OfferField::Flexible => self.offer.toggle_flexible(),
            OfferField::Seats => {}
            OfferField::Submit => self.submit_offer(),
            _ => {
                self.input_buffer = self.offer.text(field).to_string();
                self.mode = InputMode::EditingField(field);
            }
        }
    }

    /// 校验并提交表单
    pub fn submit_offer(&mut self) {
        match self.offer.validate() {
            Ok(offer) => {
                info!(
                    "ride offer posted: {} -> {} on {:?} at {:?} ({} seats, flexible: {}, notes: {:?})",
                    offer.from, offer.to, offer.date, offer.time, offer.seats, offer.flexible, offer.notes
                );
                self.message = Some(format!(
                    "Offer posted: {} to {} ({} seat{})",
                    offer.from,
                    offer.to,
                    offer.seats,
                    if offer.seats == 1 { "" } else { "s" }
                ));
                self.offer = OfferForm::default();
                self.offer_focus = 0;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    // ============ 文本输入 ============

    /// Enter：结束当前输入
    pub fn submit_input(&mut self) {
        match self.mode {
            InputMode::EditingField(field) => {
                let value = std::mem::take(&mut self.input_buffer);
                self.offer.set_text(field, value);
            }
            InputMode::Searching => {}
            InputMode::Normal => return,
        }
        self.mode = InputMode::Normal;
    }

    /// 取消当前输入
    pub fn cancel(&mut self) {
        if self.mode == InputMode::Searching {
            self.search.clear();
            self.clamp_selection();
        }
        self.mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    // ============ 远程资料 ============

    pub fn refresh_profiles(&mut self) {
        match self.profiles {
            RemoteProfiles::NotConfigured => {
                self.message = Some("Remote store is not configured".to_string());
            }
            RemoteProfiles::Unavailable(_) => {
                self.message = Some("Remote store is unavailable, check the config".to_string());
            }
            RemoteProfiles::Loading => {}
            _ => {
                self.profiles = RemoteProfiles::Loading;
                self.fetch_requested = true;
            }
        }
    }

    fn profiles_loaded(&mut self, result: Result<Vec<crate::store::ProfileRecord>, String>) {
        self.profiles = match result {
            Ok(records) => {
                info!("loaded {} remote profiles", records.len());
                RemoteProfiles::Loaded(records)
            }
            Err(e) => {
                warn!("error fetching profiles: {e}");
                RemoteProfiles::Failed(e)
            }
        };
    }
}
