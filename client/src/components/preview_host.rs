//! Bridge component between Leptos state and the imperative `preview::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The preview crate owns pixels and gesture state; this host maps the
//! configurator signal into engine styles and DOM pointer events into engine
//! input. The engine redraws synchronously on every configuration or rotation
//! change — no animation loop, no interpolation.

use leptos::prelude::*;

use crate::state::configurator::ConfiguratorState;

#[cfg(feature = "hydrate")]
use crate::state::configurator as config;
#[cfg(feature = "hydrate")]
use preview::engine::Engine;
#[cfg(feature = "hydrate")]
use preview::input::Point as PreviewPoint;
#[cfg(feature = "hydrate")]
use preview::knife as style;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
type EngineHandle = Rc<RefCell<Option<Engine>>>;
#[cfg(not(feature = "hydrate"))]
type EngineHandle = ();

#[cfg(feature = "hydrate")]
fn new_engine_handle() -> EngineHandle {
    Rc::new(RefCell::new(None))
}
#[cfg(not(feature = "hydrate"))]
fn new_engine_handle() -> EngineHandle {}

/// Project the full configuration onto the render-facing style.
#[cfg(feature = "hydrate")]
fn to_style(config: &config::KnifeConfig) -> style::KnifeStyle {
    style::KnifeStyle {
        kind: match config.kind {
            config::KnifeKind::Chef => style::KnifeKind::Chef,
            config::KnifeKind::Santoku => style::KnifeKind::Santoku,
            config::KnifeKind::Paring => style::KnifeKind::Paring,
            config::KnifeKind::Butcher => style::KnifeKind::Butcher,
            config::KnifeKind::Bread => style::KnifeKind::Bread,
            config::KnifeKind::Fillet => style::KnifeKind::Fillet,
        },
        blade_material: match config.blade.material {
            config::BladeMaterial::Steel => style::BladeMaterial::Steel,
            config::BladeMaterial::Carbon => style::BladeMaterial::Carbon,
            config::BladeMaterial::Damascus => style::BladeMaterial::Damascus,
        },
        blade_length: match config.blade.length {
            config::BladeLength::Cm15 => style::BladeLength::Cm15,
            config::BladeLength::Cm20 => style::BladeLength::Cm20,
            config::BladeLength::Cm25 => style::BladeLength::Cm25,
            config::BladeLength::Cm30 => style::BladeLength::Cm30,
        },
        handle_material: match config.handle.material {
            config::HandleMaterial::Wood => style::HandleMaterial::Wood,
            config::HandleMaterial::Carbon => style::HandleMaterial::Carbon,
            config::HandleMaterial::Bone => style::HandleMaterial::Bone,
            config::HandleMaterial::Steel => style::HandleMaterial::Steel,
        },
        engraving_text: config.engraving.text.clone(),
        engraving_position: match config.engraving.position {
            config::EngravingPosition::Blade => style::EngravingPosition::Blade,
            config::EngravingPosition::Handle => style::EngravingPosition::Handle,
        },
        engraving_color: config.engraving.color.clone(),
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> PreviewPoint {
    PreviewPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn render_logged(engine: &mut Engine) {
    if let Err(err) = engine.render() {
        log::warn!("preview render failed: {err:?}");
    }
}

/// Preview host component.
///
/// On hydration, this mounts `preview::engine::Engine` on the canvas node,
/// synchronizes the knife style from configurator state, and re-renders on
/// configuration and drag changes.
#[component]
pub fn PreviewHost() -> impl IntoView {
    let configurator = expect_context::<RwSignal<ConfiguratorState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let engine = new_engine_handle();

    #[cfg(feature = "hydrate")]
    {
        // Mount the engine once the canvas node exists, then paint the
        // initial state.
        let engine_mount = engine.clone();
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine_mount.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas);
            instance.set_style(to_style(&configurator.get_untracked().config));
            render_logged(&mut instance);
            *engine_mount.borrow_mut() = Some(instance);
        });

        // Push configuration changes into the engine; redraw when the
        // render-facing style actually changed.
        let engine_sync = engine.clone();
        Effect::new(move || {
            let next = to_style(&configurator.get().config);
            let mut slot = engine_sync.borrow_mut();
            let Some(instance) = slot.as_mut() else {
                return;
            };
            if instance.set_style(next) {
                render_logged(instance);
            }
        });
    }

    let engine_down = engine.clone();
    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(instance) = engine_down.borrow_mut().as_mut() {
                instance.on_pointer_down(pointer_point(&ev));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&engine_down, ev);
        }
    };

    let engine_move = engine.clone();
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(instance) = engine_move.borrow_mut().as_mut() {
                if instance.on_pointer_move(pointer_point(&ev)) {
                    render_logged(instance);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&engine_move, ev);
        }
    };

    let engine_up = engine.clone();
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let _ = ev;
            if let Some(instance) = engine_up.borrow_mut().as_mut() {
                instance.on_pointer_up();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&engine_up, ev);
        }
    };

    let engine_leave = engine.clone();
    let on_pointer_leave = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let _ = ev;
            if let Some(instance) = engine_leave.borrow_mut().as_mut() {
                instance.on_pointer_leave();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&engine_leave, ev);
        }
    };

    view! {
        <div class="preview-host">
            <canvas
                node_ref=canvas_ref
                class="preview-host__canvas"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            ></canvas>
            <div class="preview-host__hint">"Arrastra para rotar"</div>
        </div>
    }
}
