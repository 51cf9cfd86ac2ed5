use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};
use tray_icon::menu::{CheckMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};
use winit::event::{Event, StartCause};
use winit::event_loop::{ControlFlow, EventLoopBuilder};

use crate::click::{BinAction, ClickDisambiguator, ClickEvent};
use crate::error::{BinError, Result};
use crate::icon::{self, IconVariant};
use crate::platform;
use crate::settings::Settings;
use crate::theme::ThemeMonitor;
use crate::toast;

const APP_NAME: &str = "QuickBin";
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(200);
const THEME_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Build the tray icon and run the event loop until the user exits.
///
/// Everything runs on this one thread: tray and menu events are drained on
/// each wakeup, then due timers fire, then the next wakeup is scheduled as
/// the nearest of the click deadline and the theme poll tick.
pub fn run(settings: Settings, settings_path: PathBuf) -> Result<()> {
    let event_loop = EventLoopBuilder::new()
        .build()
        .map_err(|e| BinError::Tray(e.to_string()))?;

    let mut app = TrayApp::new(settings, settings_path)?;
    let tray_events = TrayIconEvent::receiver();
    let menu_events = MenuEvent::receiver();

    event_loop
        .run(move |event, elwt| {
            // The tray icon has to be created once the loop is live.
            if let Event::NewEvents(StartCause::Init) = event {
                if let Err(e) = app.build_tray() {
                    error!("could not create the tray icon: {e}");
                    elwt.exit();
                    return;
                }
            }

            while let Ok(tray_event) = tray_events.try_recv() {
                app.on_tray_event(tray_event);
            }
            while let Ok(menu_event) = menu_events.try_recv() {
                if app.on_menu_event(&menu_event) {
                    elwt.exit();
                    return;
                }
            }

            let now = Instant::now();
            if let Some(action) = app.clicks.fire_due(now) {
                app.dispatch(action);
            }
            app.poll_theme(now);

            elwt.set_control_flow(ControlFlow::WaitUntil(app.next_wakeup()));
        })
        .map_err(|e| BinError::Tray(e.to_string()))
}

struct TrayApp {
    settings: Settings,
    settings_path: PathBuf,
    clicks: ClickDisambiguator,
    theme: ThemeMonitor<fn() -> Result<bool>>,
    next_theme_poll: Instant,
    /// The release that completes a double click arrives as one more click
    /// event; it must not arm a fresh deadline.
    swallow_release: bool,
    menu: Menu,
    boot_toggle: CheckMenuItem,
    empty_toggle: CheckMenuItem,
    quit_item: MenuItem,
    tray: Option<TrayIcon>,
}

impl TrayApp {
    fn new(settings: Settings, settings_path: PathBuf) -> Result<Self> {
        let boot_toggle = CheckMenuItem::new("Start at boot", true, settings.start_at_boot, None);
        let empty_toggle = CheckMenuItem::new(
            "Double click emptying",
            true,
            settings.empty_on_double_click,
            None,
        );
        let quit_item = MenuItem::new("Exit", true, None);

        let menu = Menu::new();
        menu.append_items(&[
            &boot_toggle,
            &empty_toggle,
            &PredefinedMenuItem::separator(),
            &quit_item,
        ])
        .map_err(|e| BinError::Tray(e.to_string()))?;

        Ok(Self {
            settings,
            settings_path,
            clicks: ClickDisambiguator::new(DOUBLE_CLICK_WINDOW),
            theme: ThemeMonitor::new(platform::read_light_theme as fn() -> Result<bool>),
            next_theme_poll: Instant::now() + THEME_POLL_INTERVAL,
            swallow_release: false,
            menu,
            boot_toggle,
            empty_toggle,
            quit_item,
            tray: None,
        })
    }

    fn build_tray(&mut self) -> Result<()> {
        let icon = icon::render(self.theme.current(), IconVariant::Idle)?;
        let tray = TrayIconBuilder::new()
            .with_tooltip(APP_NAME)
            .with_menu(Box::new(self.menu.clone()))
            .with_menu_on_left_click(false)
            .with_icon(icon)
            .build()
            .map_err(|e| BinError::Tray(e.to_string()))?;
        self.tray = Some(tray);
        Ok(())
    }

    fn on_tray_event(&mut self, event: TrayIconEvent) {
        let now = Instant::now();
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => {
                if self.swallow_release {
                    self.swallow_release = false;
                    return;
                }
                if let Some(action) = self.clicks.on_event(ClickEvent::Single, now) {
                    self.dispatch(action);
                }
            }
            TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            } => {
                self.swallow_release = true;
                // With the preference off the armed single-click deadline
                // survives, so the open action still fires.
                if !self.settings.empty_on_double_click {
                    return;
                }
                if let Some(action) = self.clicks.on_event(ClickEvent::Double, now) {
                    self.dispatch(action);
                }
            }
            _ => {}
        }
    }

    /// Handle a menu activation. Returns true when the app should exit.
    fn on_menu_event(&mut self, event: &MenuEvent) -> bool {
        if event.id() == self.quit_item.id() {
            info!("exit requested from the tray menu");
            return true;
        }
        if event.id() == self.empty_toggle.id() {
            // The check mark flips before the event is delivered.
            self.settings.empty_on_double_click = self.empty_toggle.is_checked();
            self.persist_settings();
        } else if event.id() == self.boot_toggle.id() {
            self.settings.start_at_boot = self.boot_toggle.is_checked();
            self.persist_settings();
            if let Err(e) = platform::set_start_at_boot(self.settings.start_at_boot, APP_NAME) {
                // Registry write can be denied by policy; the preference
                // itself is kept.
                warn!("could not update the boot registration: {e}");
            }
        }
        false
    }

    fn dispatch(&mut self, action: BinAction) {
        match action {
            BinAction::Open => {
                debug!("opening the Recycle Bin view");
                if let Err(e) = platform::open_recycle_bin() {
                    warn!("could not open the Recycle Bin: {e}");
                }
            }
            BinAction::Empty => self.empty_bin(),
        }
    }

    fn empty_bin(&mut self) {
        self.apply_icon(IconVariant::Busy);
        match platform::empty_recycle_bin(self.settings.empty_flags) {
            Ok(()) => {
                toast::show(
                    "Recycle Bin Cleared",
                    "Successful emptying of the recycle bin.",
                );
            }
            Err(e) => {
                warn!("could not empty the Recycle Bin: {e}");
                toast::show("Recycle Bin Error", "Failed to empty the Recycle Bin.");
            }
        }
        self.apply_icon(IconVariant::Idle);
    }

    fn poll_theme(&mut self, now: Instant) {
        if now < self.next_theme_poll {
            return;
        }
        self.next_theme_poll = now + THEME_POLL_INTERVAL;
        if let Some(light) = self.theme.poll_once() {
            debug!("OS theme changed, light = {light}");
            self.apply_icon(IconVariant::Idle);
        }
    }

    fn apply_icon(&self, variant: IconVariant) {
        if let Some(tray) = &self.tray {
            match icon::render(self.theme.current(), variant) {
                Ok(icon) => {
                    if let Err(e) = tray.set_icon(Some(icon)) {
                        warn!("could not update the tray icon: {e}");
                    }
                }
                Err(e) => warn!("could not render the tray icon: {e}"),
            }
        }
    }

    fn next_wakeup(&self) -> Instant {
        match self.clicks.deadline() {
            Some(deadline) => deadline.min(self.next_theme_poll),
            None => self.next_theme_poll,
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(
                "could not persist settings to {}: {e}",
                self.settings_path.display()
            );
        }
    }
}
