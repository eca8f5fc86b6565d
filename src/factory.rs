//! 出厂测试状态机
//!
//! 依次执行LCD颜色测试、LED/按键测试、SD卡检测，然后进入图片轮播

use crate::board::{LedPattern, Rgb};
use crate::color::Color;
use crate::config::SD_RETRY_INTERVAL_MS;
use alloc::vec::Vec;
use log::{info, warn};

/// LCD测试的清屏颜色顺序
pub const LCD_TEST_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];

/// 每种测试颜色的停留时间
pub const LCD_TEST_STEP_MS: u32 = 500;

/// LED/按键测试需要的按键次数
pub const KEY_PRESSES_TO_PASS: u32 = 3;

/// 按键轮询间隔
pub const KEY_POLL_MS: u32 = 100;

/// 错误状态下的慢速重试间隔
pub const ERROR_RETRY_MS: u32 = 5000;

/// 出厂测试状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryState {
    Init,
    LcdTest,
    LedKeyTest,
    SdProbe,
    PictureDir,
    Slideshow,
    Error,
}

/// 出厂测试事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryEvent {
    Started,
    KeyPressed,
    SdReady,
    SdFailed,
    DirOpened,
    DirMissing,
    PictureShown,
    PictureFailed,
    /// 等待超时，没有按键
    Tick,
}

/// 状态转换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    /// 保持当前状态
    Stay,
    /// 转换到新状态
    Transition(FactoryState),
    /// 转换到新状态并重置重试计数
    TransitionWithReset(FactoryState),
}

/// 固件需要执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 以测试颜色清屏
    ClearScreen(Color),
    /// 绘制LED/KEY测试面板
    DrawLedKeyPanel,
    /// 设置状态LED闪烁模式
    SetLed(LedPattern),
    SetRgb(Rgb),
    /// 挂载SD卡
    ProbeSd,
    /// 打开图片目录
    OpenPictureDir,
    /// 显示下一张图片
    ShowNextPicture,
    /// 显示错误提示
    ShowErrorBanner(&'static str),
    /// 延时后再次检测
    ScheduleRetry(u32),
    /// 等待按键，超时产生 Tick
    Wait(u32),
    LogError(FactoryState),
}

/// 错误上下文信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorContext {
    pub error_state: FactoryState,
    pub error_count: u32,
    pub last_good_state: FactoryState,
}

/// 出厂测试状态机
pub struct FactoryStateMachine {
    current_state: FactoryState,
    previous_state: Option<FactoryState>,
    retry_count: u32,
    max_retries: u32,
    error_context: Option<ErrorContext>,
    color_index: usize,
    key_presses: u32,
    rgb: Rgb,
    pictures_shown: u32,
    slideshow_interval_ms: u32,
    panel_drawn: bool,
}

impl Default for FactoryStateMachine {
    fn default() -> Self {
        Self::new(3000)
    }
}

impl FactoryStateMachine {
    pub fn new(slideshow_interval_ms: u32) -> Self {
        Self {
            current_state: FactoryState::Init,
            previous_state: None,
            retry_count: 0,
            max_retries: 3,
            error_context: None,
            color_index: 0,
            key_presses: 0,
            rgb: Rgb::Off,
            pictures_shown: 0,
            slideshow_interval_ms,
            panel_drawn: false,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn get_current_state(&self) -> FactoryState {
        self.current_state
    }

    pub fn get_previous_state(&self) -> Option<FactoryState> {
        self.previous_state
    }

    pub fn get_retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn get_error_context(&self) -> Option<ErrorContext> {
        self.error_context
    }

    pub fn pictures_shown(&self) -> u32 {
        self.pictures_shown
    }

    /// 获取对应的LED闪烁模式
    pub fn get_led_pattern(&self) -> LedPattern {
        match self.current_state {
            FactoryState::Init => LedPattern::Solid,
            FactoryState::LcdTest | FactoryState::LedKeyTest => LedPattern::Slow,
            FactoryState::SdProbe | FactoryState::PictureDir => LedPattern::Fast,
            FactoryState::Slideshow => LedPattern::Slow,
            FactoryState::Error => LedPattern::Fast,
        }
    }

    /// 处理事件
    pub fn handle_event(&mut self, event: FactoryEvent) -> StateTransition {
        let transition = self.get_state_transition(self.current_state, event);

        match transition {
            StateTransition::Transition(new_state) => {
                self.transition_to_state(new_state);
            }
            StateTransition::TransitionWithReset(new_state) => {
                self.retry_count = 0;
                self.transition_to_state(new_state);
            }
            StateTransition::Stay => {}
        }

        transition
    }

    /// 状态机更新，返回需要执行的动作
    pub fn update(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        actions.push(Action::SetLed(self.get_led_pattern()));

        match self.current_state {
            FactoryState::Init => {}

            FactoryState::LcdTest => {
                let color = LCD_TEST_COLORS[self.color_index % LCD_TEST_COLORS.len()];
                actions.push(Action::ClearScreen(color));
                actions.push(Action::Wait(LCD_TEST_STEP_MS));
            }

            FactoryState::LedKeyTest => {
                // 进入状态后只绘制一次
                if !self.panel_drawn {
                    actions.push(Action::DrawLedKeyPanel);
                }
                actions.push(Action::SetRgb(self.rgb));
                actions.push(Action::Wait(KEY_POLL_MS));
            }

            FactoryState::SdProbe => {
                if self.retry_count > 0 {
                    actions.push(Action::ScheduleRetry(SD_RETRY_INTERVAL_MS));
                }
                actions.push(Action::ProbeSd);
            }

            FactoryState::PictureDir => {
                actions.push(Action::OpenPictureDir);
            }

            FactoryState::Slideshow => {
                actions.push(Action::ShowNextPicture);
                actions.push(Action::Wait(self.slideshow_interval_ms));
            }

            FactoryState::Error => {
                actions.push(Action::LogError(self.current_state));
                actions.push(Action::ShowErrorBanner(self.error_banner()));
                actions.push(Action::ScheduleRetry(ERROR_RETRY_MS));
            }
        }

        actions
    }

    fn error_banner(&self) -> &'static str {
        match self.error_context.map(|c| c.last_good_state) {
            Some(FactoryState::PictureDir) => "No picture dir!",
            Some(FactoryState::Slideshow) => "Picture error!",
            _ => "SD card error!",
        }
    }

    fn transition_to_state(&mut self, new_state: FactoryState) {
        if new_state == self.current_state {
            return;
        }
        match new_state {
            FactoryState::Slideshow => info!("[FACTORY] slideshow running"),
            FactoryState::Error => {
                warn!(
                    "[FACTORY] error after {:?}, {} retries",
                    self.current_state, self.retry_count
                );
                self.set_error_context(new_state);
            }
            FactoryState::LcdTest => self.color_index = 0,
            FactoryState::LedKeyTest => {
                self.key_presses = 0;
                self.rgb = Rgb::Off;
                self.panel_drawn = false;
            }
            _ => info!("[FACTORY] {:?} -> {:?}", self.current_state, new_state),
        }
        self.previous_state = Some(self.current_state);
        self.current_state = new_state;
    }

    /// 获取状态转换规则
    fn get_state_transition(&mut self, current_state: FactoryState, event: FactoryEvent) -> StateTransition {
        match (current_state, event) {
            (FactoryState::Init, FactoryEvent::Started) => {
                StateTransition::Transition(FactoryState::LcdTest)
            }

            // 每个 Tick 换一种颜色，按键跳过
            (FactoryState::LcdTest, FactoryEvent::Tick) => {
                if self.color_index + 1 < LCD_TEST_COLORS.len() {
                    self.color_index += 1;
                    StateTransition::Stay
                } else {
                    StateTransition::TransitionWithReset(FactoryState::LedKeyTest)
                }
            }
            (FactoryState::LcdTest, FactoryEvent::KeyPressed) => {
                StateTransition::TransitionWithReset(FactoryState::LedKeyTest)
            }

            (FactoryState::LedKeyTest, FactoryEvent::KeyPressed) => {
                self.key_presses += 1;
                self.rgb = self.rgb.next();
                if self.key_presses >= KEY_PRESSES_TO_PASS {
                    StateTransition::TransitionWithReset(FactoryState::SdProbe)
                } else {
                    StateTransition::Stay
                }
            }

            (FactoryState::SdProbe, FactoryEvent::SdReady) => {
                StateTransition::TransitionWithReset(FactoryState::PictureDir)
            }
            (FactoryState::SdProbe, FactoryEvent::SdFailed) => {
                self.retry_count += 1;
                if self.retry_count < self.max_retries {
                    StateTransition::Stay
                } else {
                    StateTransition::Transition(FactoryState::Error)
                }
            }

            (FactoryState::PictureDir, FactoryEvent::DirOpened) => {
                StateTransition::TransitionWithReset(FactoryState::Slideshow)
            }
            (FactoryState::PictureDir, FactoryEvent::DirMissing) => {
                StateTransition::Transition(FactoryState::Error)
            }
            (FactoryState::PictureDir, FactoryEvent::SdFailed) => {
                StateTransition::Transition(FactoryState::SdProbe)
            }

            (FactoryState::Slideshow, FactoryEvent::PictureShown) => {
                self.pictures_shown += 1;
                self.retry_count = 0;
                StateTransition::Stay
            }
            (FactoryState::Slideshow, FactoryEvent::PictureFailed) => {
                self.retry_count += 1;
                if self.retry_count < self.max_retries {
                    StateTransition::Stay
                } else {
                    StateTransition::Transition(FactoryState::Error)
                }
            }
            (FactoryState::Slideshow, FactoryEvent::SdFailed) => {
                StateTransition::TransitionWithReset(FactoryState::SdProbe)
            }

            // 错误状态慢速重试
            (FactoryState::Error, FactoryEvent::Tick | FactoryEvent::KeyPressed) => {
                StateTransition::TransitionWithReset(FactoryState::SdProbe)
            }

            _ => StateTransition::Stay,
        }
    }

    fn set_error_context(&mut self, error_state: FactoryState) {
        self.error_context = Some(ErrorContext {
            error_state,
            error_count: self.retry_count,
            last_good_state: self.current_state,
        });
    }

    pub fn is_error_state(&self) -> bool {
        self.current_state == FactoryState::Error
    }

    /// 标记测试面板已绘制
    pub fn mark_panel_drawn(&mut self) {
        self.panel_drawn = true;
    }

    /// 强制转换到指定状态
    pub fn force_transition(&mut self, new_state: FactoryState) {
        self.transition_to_state(new_state);
        self.retry_count = 0;
        self.error_context = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_sd_probe() -> FactoryStateMachine {
        let mut sm = FactoryStateMachine::new(3000);
        sm.force_transition(FactoryState::SdProbe);
        sm
    }

    #[test]
    fn lcd_test_cycles_colours_then_moves_on() {
        let mut sm = FactoryStateMachine::default();
        assert_eq!(sm.update(), vec![Action::SetLed(LedPattern::Solid)]);
        sm.handle_event(FactoryEvent::Started);

        let mut shown = Vec::new();
        while sm.get_current_state() == FactoryState::LcdTest {
            let actions = sm.update();
            assert_eq!(actions.last(), Some(&Action::Wait(LCD_TEST_STEP_MS)));
            if let Some(Action::ClearScreen(c)) = actions.get(1) {
                shown.push(*c);
            }
            sm.handle_event(FactoryEvent::Tick);
        }
        assert_eq!(shown, LCD_TEST_COLORS);
        assert_eq!(sm.get_current_state(), FactoryState::LedKeyTest);
    }

    #[test]
    fn key_presses_step_rgb_and_pass() {
        let mut sm = FactoryStateMachine::default();
        sm.handle_event(FactoryEvent::Started);
        sm.handle_event(FactoryEvent::KeyPressed);
        assert_eq!(sm.get_current_state(), FactoryState::LedKeyTest);
        let actions = sm.update();
        assert!(actions.contains(&Action::DrawLedKeyPanel));
        assert!(actions.contains(&Action::SetRgb(Rgb::Off)));
        sm.mark_panel_drawn();
        assert!(!sm.update().contains(&Action::DrawLedKeyPanel));

        assert_eq!(sm.handle_event(FactoryEvent::Tick), StateTransition::Stay);
        sm.handle_event(FactoryEvent::KeyPressed);
        assert!(sm.update().contains(&Action::SetRgb(Rgb::Red)));
        sm.handle_event(FactoryEvent::KeyPressed);
        assert_eq!(
            sm.handle_event(FactoryEvent::KeyPressed),
            StateTransition::TransitionWithReset(FactoryState::SdProbe)
        );
        assert_eq!(sm.update(), vec![Action::SetLed(LedPattern::Fast), Action::ProbeSd]);
    }

    #[test]
    fn sd_probe_retries_with_back_off_then_errors() {
        let mut sm = at_sd_probe();
        sm.handle_event(FactoryEvent::SdFailed);
        assert_eq!(sm.get_retry_count(), 1);
        assert_eq!(
            &sm.update()[1..],
            &[Action::ScheduleRetry(SD_RETRY_INTERVAL_MS), Action::ProbeSd]
        );
        sm.handle_event(FactoryEvent::SdFailed);
        assert_eq!(
            sm.handle_event(FactoryEvent::SdFailed),
            StateTransition::Transition(FactoryState::Error)
        );

        let ctx = sm.get_error_context().unwrap();
        assert_eq!(ctx.last_good_state, FactoryState::SdProbe);
        assert_eq!(ctx.error_count, 3);
        assert_eq!(
            sm.update(),
            vec![
                Action::SetLed(LedPattern::Fast),
                Action::LogError(FactoryState::Error),
                Action::ShowErrorBanner("SD card error!"),
                Action::ScheduleRetry(ERROR_RETRY_MS),
            ]
        );

        // slow retry starts a fresh probe round
        sm.handle_event(FactoryEvent::Tick);
        assert_eq!(sm.get_current_state(), FactoryState::SdProbe);
        assert_eq!(sm.get_retry_count(), 0);
    }

    #[test]
    fn happy_path_reaches_slideshow() {
        let mut sm = at_sd_probe();
        sm.handle_event(FactoryEvent::SdReady);
        assert_eq!(&sm.update()[1..], &[Action::OpenPictureDir]);
        sm.handle_event(FactoryEvent::DirOpened);
        assert_eq!(sm.get_current_state(), FactoryState::Slideshow);
        assert_eq!(&sm.update()[1..], &[Action::ShowNextPicture, Action::Wait(3000)]);

        for _ in 0..5 {
            sm.handle_event(FactoryEvent::PictureShown);
        }
        assert_eq!(sm.pictures_shown(), 5);
        assert!(!sm.is_error_state());
    }

    #[test]
    fn missing_dir_shows_its_own_banner() {
        let mut sm = at_sd_probe();
        sm.handle_event(FactoryEvent::SdReady);
        sm.handle_event(FactoryEvent::DirMissing);
        assert!(sm.is_error_state());
        assert!(sm.update().contains(&Action::ShowErrorBanner("No picture dir!")));
    }

    #[test]
    fn picture_failures_are_bounded_and_reset_by_success() {
        let mut sm = at_sd_probe().with_max_retries(2);
        sm.handle_event(FactoryEvent::SdReady);
        sm.handle_event(FactoryEvent::DirOpened);

        sm.handle_event(FactoryEvent::PictureFailed);
        sm.handle_event(FactoryEvent::PictureShown);
        sm.handle_event(FactoryEvent::PictureFailed);
        assert_eq!(sm.get_current_state(), FactoryState::Slideshow);
        sm.handle_event(FactoryEvent::PictureFailed);
        assert_eq!(sm.get_current_state(), FactoryState::Error);
        assert!(sm.update().contains(&Action::ShowErrorBanner("Picture error!")));
    }

    #[test]
    fn card_removal_goes_back_to_probe() {
        let mut sm = at_sd_probe();
        sm.handle_event(FactoryEvent::SdReady);
        sm.handle_event(FactoryEvent::DirOpened);
        sm.handle_event(FactoryEvent::SdFailed);
        assert_eq!(sm.get_current_state(), FactoryState::SdProbe);
        assert_eq!(sm.get_previous_state(), Some(FactoryState::Slideshow));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut sm = FactoryStateMachine::default();
        assert_eq!(sm.handle_event(FactoryEvent::PictureShown), StateTransition::Stay);
        assert_eq!(sm.handle_event(FactoryEvent::SdReady), StateTransition::Stay);
        assert_eq!(sm.get_current_state(), FactoryState::Init);
    }
}
