//! 时钟：周期性发送当前时间 (HH:MM)

use std::time::Duration;

use chrono::{DateTime, Local};
use log::debug;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::ui::actions::Action;

pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// 可取消的定时任务，随界面启动/销毁
pub struct Clock {
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// 启动时钟；第一次 tick 立即发送
    pub fn start(runtime: &Handle, period: Duration, tx: UnboundedSender<Action>) -> Self {
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if tx.send(Action::ClockTick(format_clock(&Local::now()))).is_err() {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("clock stopped");
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    #[test]
    fn test_format_clock() {
        let t = Local.with_ymd_and_hms(2025, 3, 9, 7, 5, 30).unwrap();
        assert_eq!(format_clock(&t), "07:05");
    }

    #[tokio::test]
    async fn test_clock_ticks_until_stopped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut clock = Clock::start(&Handle::current(), Duration::from_millis(10), tx);

        let first = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
        assert!(matches!(first, Some(Action::ClockTick(ref s)) if s.len() == 5));

        clock.stop();

        // 任务中止后发送端被释放，通道最终关闭
        let drained = timeout(Duration::from_secs(1), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }
}
