mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs::{alert, confirm};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use shared::constants::{CLEAR_CONFIRM, SPIN_LIMIT_MESSAGE, UNLOCKED_ALERT};
use shared::{
    Clock, FrameScheduler, GatedWheel, HostLock, NameWheel, Palette, SpinRejected, SpinTick,
    UnlockError, WheelError,
};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::config::{get_host_key, spin_requires_host, CONFETTI_MS};
use crate::hooks::use_theme;
use crate::storage::BrowserStore;
use crate::styles;
use wheel_canvas::WheelCanvas;
use wheel_utils::{Confetti, NameList, ResultDisplay, SpinButton};

// Confetti burst shown when a winner is picked
const CUSTOM_CSS: &str = r#"
@keyframes confetti-fall {
    0% { transform: translateY(-10vh) rotate(0deg); opacity: 1; }
    100% { transform: translateY(100vh) rotate(540deg); opacity: 0; }
}

.confetti {
    pointer-events: none;
    position: fixed;
    inset: 0;
    overflow: hidden;
    z-index: 50;
}

.confetti.hidden { display: none; }

.confetti-piece {
    position: absolute;
    top: 0;
    width: 10px;
    height: 16px;
    background: #f59e0b;
    animation: confetti-fall 0.7s ease-out forwards;
}

.confetti-piece:nth-child(3n) { background: #b91c1c; }
.confetti-piece:nth-child(3n + 1) { background: #22c55e; }
.confetti-piece:nth-child(4n) { background: #0ea5e9; }
"#;

type Wheel = GatedWheel<BrowserStore>;

/// `performance.now()`, falling back to the wall clock.
struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

/// Re-arms `requestAnimationFrame` for as long as the wheel keeps turning.
#[derive(Clone)]
struct FrameLoop {
    wheel: Rc<RefCell<Wheel>>,
    handle: Rc<RefCell<Option<AnimationFrame>>>,
    on_tick: Callback<SpinTick>,
}

impl FrameScheduler for FrameLoop {
    fn request_frame(&mut self) {
        let next = self.clone();
        let frame = request_animation_frame(move |_| next.run());
        *self.handle.borrow_mut() = Some(frame);
    }
}

impl FrameLoop {
    fn run(mut self) {
        let wheel = Rc::clone(&self.wheel);
        let tick = wheel.borrow_mut().on_frame(&PerformanceClock, &mut self);
        self.on_tick.emit(tick);
    }
}

#[function_component(NameWheelPage)]
pub fn name_wheel_page() -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let wheel = use_mut_ref(|| {
        GatedWheel::new(NameWheel::new(), HostLock::new(get_host_key()), BrowserStore::local())
            .with_spin_requires_host(spin_requires_host())
    });
    let frame_handle = use_mut_ref(|| None::<AnimationFrame>);
    let confetti_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();

    let name_input = use_state(String::new);
    let key_input = use_state(String::new);
    let key_error = use_state(|| None::<String>);
    let show_confetti = use_state(|| false);
    let name_ref = use_node_ref();
    let theme = use_theme();

    let on_tick = {
        let redraw = redraw.clone();
        let show_confetti = show_confetti.clone();
        let confetti_timer = confetti_timer.clone();

        Callback::from(move |tick: SpinTick| match tick {
            SpinTick::Finished(event) => {
                redraw.force_update();
                show_confetti.set(true);
                let hide = show_confetti.clone();
                *confetti_timer.borrow_mut() = Some(Timeout::new(CONFETTI_MS, move || hide.set(false)));
                alert(&format!("Selected name: {}", event.name));
            }
            SpinTick::Inconsistent { index, len } => {
                log::error!("winner slot {} missing from a list of {}", index, len);
                redraw.force_update();
            }
            SpinTick::Turning { .. } | SpinTick::Idle => redraw.force_update(),
        })
    };

    let on_spin = {
        let wheel = wheel.clone();
        let frame_handle = frame_handle.clone();
        let on_tick = on_tick.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: MouseEvent| {
            let mut frames = FrameLoop {
                wheel: wheel.clone(),
                handle: frame_handle.clone(),
                on_tick: on_tick.clone(),
            };
            let started = wheel.borrow_mut().start_spin(&PerformanceClock, &mut frames);
            match started {
                Ok(_) => redraw.force_update(),
                Err(SpinRejected::AlreadySpinning) => {}
                Err(err) => {
                    redraw.force_update();
                    alert(&err.to_string());
                }
            }
        })
    };

    let on_add = {
        let wheel = wheel.clone();
        let name_input = name_input.clone();
        let name_ref = name_ref.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: ()| {
            let added = wheel.borrow_mut().add_name(name_input.as_str());
            match added {
                Ok(true) => {
                    name_input.set(String::new());
                    redraw.force_update();
                    if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                Ok(false) => {}
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    let on_remove = {
        let wheel = wheel.clone();
        let redraw = redraw.clone();

        Callback::from(move |index: usize| {
            let removed = wheel.borrow_mut().remove_name(index);
            match removed {
                Ok(_) => redraw.force_update(),
                Err(err) => {
                    log::warn!("remove failed: {}", err);
                    alert(&err.to_string());
                }
            }
        })
    };

    let on_clear = {
        let wheel = wheel.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: MouseEvent| {
            let (unlocked, empty) = {
                let wheel = wheel.borrow();
                (wheel.lock().is_unlocked(), wheel.wheel().pool().is_empty())
            };
            if !unlocked {
                alert(&WheelError::Locked.to_string());
                return;
            }
            if empty || !confirm(CLEAR_CONFIRM) {
                return;
            }
            let cleared = wheel.borrow_mut().clear_all();
            match cleared {
                Ok(()) => redraw.force_update(),
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    let on_auth = {
        let wheel = wheel.clone();
        let key_input = key_input.clone();
        let key_error = key_error.clone();
        let redraw = redraw.clone();

        Callback::from(move |_: ()| {
            let was_unlocked = wheel.borrow().lock().is_unlocked();
            if was_unlocked {
                wheel.borrow_mut().lock_mut().lock();
                key_input.set(String::new());
                key_error.set(None);
                redraw.force_update();
                return;
            }

            let result = wheel.borrow_mut().lock_mut().unlock(key_input.as_str());
            match result {
                Ok(()) => {
                    key_input.set(String::new());
                    key_error.set(None);
                    redraw.force_update();
                    alert(UNLOCKED_ALERT);
                }
                Err(UnlockError::BlankKey) => alert(&UnlockError::BlankKey.to_string()),
                Err(err) => key_error.set(Some(err.to_string())),
            }
        })
    };

    let on_name_input = {
        let name_input = name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name_input.set(input.value());
        })
    };

    let on_name_keydown = {
        let on_add = on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_add.emit(());
            }
        })
    };

    let on_key_input = {
        let key_input = key_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            key_input.set(input.value());
        })
    };

    let on_key_keydown = {
        let on_auth = on_auth.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_auth.emit(());
            }
        })
    };

    let (frame, names, is_spinning, spin_disabled, spin_spent, unlocked, hint, last_winner) = {
        let wheel = wheel.borrow();
        (
            wheel.frame(Palette::Fixed),
            wheel.wheel().names().to_vec(),
            wheel.wheel().is_spinning(),
            wheel.spin_controls_disabled(),
            !wheel.limit().has_spin_available(),
            wheel.lock().is_unlocked(),
            wheel.lock().hint(),
            wheel.wheel().last_winner().map(str::to_string),
        )
    };
    let hint = (*key_error).clone().unwrap_or_else(|| hint.to_string());
    let name_count = names.len();
    let auth_label = if unlocked { "Lock" } else { "Unlock" };

    html! {
        <div class={styles::CONTAINER}>
            <div class="flex items-center justify-between mb-6">
                <h1 class={styles::TEXT_H1}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-red-600 to-amber-500">{"Name Wheel"}</span>
                </h1>
                <button class={styles::BUTTON_SECONDARY} onclick={theme.toggle.clone()}>
                    {theme.theme.toggle_label()}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class={styles::CARD}>
                    <WheelCanvas frame={frame} is_spinning={is_spinning} />
                    <div class="flex justify-center mt-6">
                        <SpinButton is_spinning={is_spinning} disabled={spin_disabled} onclick={on_spin} />
                    </div>
                    if spin_spent {
                        <p class={classes!(styles::TEXT_ERROR, "mt-2", "text-center")}>{SPIN_LIMIT_MESSAGE}</p>
                    }
                    <ResultDisplay last_winner={last_winner} />
                </div>

                <div class={classes!(styles::CARD, "space-y-6")}>
                    <div>
                        <label class={styles::TEXT_LABEL}>{"Host key"}</label>
                        <div class="flex gap-2">
                            <input
                                type="password"
                                class={styles::INPUT}
                                value={(*key_input).clone()}
                                oninput={on_key_input}
                                onkeydown={on_key_keydown}
                            />
                            <button class={classes!(styles::BUTTON_PRIMARY, "mt-2")} onclick={Callback::from(move |_: MouseEvent| on_auth.emit(()))}>
                                {auth_label}
                            </button>
                        </div>
                        <p class={styles::TEXT_HINT}>{hint}</p>
                    </div>

                    <div>
                        <label class={styles::TEXT_LABEL}>{"Add a name"}</label>
                        <div class="flex gap-2">
                            <input
                                ref={name_ref}
                                type="text"
                                class={styles::INPUT}
                                placeholder="Type a name and press Enter"
                                value={(*name_input).clone()}
                                disabled={!unlocked}
                                oninput={on_name_input}
                                onkeydown={on_name_keydown}
                            />
                            <button
                                class={classes!(styles::BUTTON_PRIMARY, "mt-2")}
                                disabled={!unlocked}
                                onclick={Callback::from(move |_: MouseEvent| on_add.emit(()))}
                            >
                                {"Add"}
                            </button>
                        </div>
                    </div>

                    <div>
                        <div class="flex items-center justify-between mb-3">
                            <span class={styles::TEXT_SECONDARY}>
                                {"Names: "}<span class="font-semibold">{name_count.to_string()}</span>
                            </span>
                            <button class={styles::BUTTON_DANGER} disabled={!unlocked} onclick={on_clear}>
                                {"Clear all"}
                            </button>
                        </div>
                        <NameList names={names} on_remove={on_remove} />
                    </div>
                </div>
            </div>

            <Confetti visible={*show_confetti} />
        </div>
    }
}
