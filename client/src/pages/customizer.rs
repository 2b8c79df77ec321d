//! Knife customizer page: the six-step wizard plus the live canvas preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wizard state lives in the shared [`ConfiguratorState`] signal so the
//! preview column and the step column stay in sync. Step pills jump anywhere
//! (no validation gates), Anterior/Siguiente clamp at the ends. Committing
//! synthesizes a cart line and leaves the configuration open for further
//! customization; failures surface a modal and preserve state for retry.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::preview_host::PreviewHost;
use crate::components::seo::Seo;
use crate::state::cart::{self, CartState};
use crate::state::configurator::{
    Accessory, BladeLength, BladeMaterial, ConfiguratorState, EngravingPosition, HandleMaterial,
    KnifeKind, MAX_ENGRAVING_CHARS, WizardStep,
};
use crate::util::format::price_label;

/// Milliseconds since the Unix epoch, used to salt custom line-item ids.
fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Commit the current configuration to the cart.
///
/// # Errors
///
/// Returns a user-facing message when the configuration violates the
/// engraving bound (re-checked here so a bad path can never store it).
fn commit_to_cart(
    configurator: RwSignal<ConfiguratorState>,
    cart: RwSignal<CartState>,
) -> Result<(), String> {
    let config = configurator.get_untracked().config;
    if config.engraving.text.chars().count() > MAX_ENGRAVING_CHARS {
        return Err("Error al agregar al carrito. Por favor, inténtalo de nuevo.".to_owned());
    }
    let item = config.line_item(now_ms());
    cart.update(|c| {
        c.add_item(item);
        cart::save(c);
    });
    Ok(())
}

/// Customizer page — routed as `/custom`.
#[component]
pub fn CustomizerPage() -> impl IntoView {
    let configurator = expect_context::<RwSignal<ConfiguratorState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    let show_success = RwSignal::new(false);
    let error_message = RwSignal::new(None::<String>);

    let step = move || configurator.get().step;
    let price = move || configurator.get().config.price();

    let on_previous = move |_| {
        configurator.update(|s| s.step = s.step.previous());
    };
    let on_next = move |_| {
        configurator.update(|s| s.step = s.step.next());
    };

    let on_add_to_cart = move |_| {
        configurator.update(|s| s.adding = true);
        match commit_to_cart(configurator, cart) {
            Ok(()) => show_success.set(true),
            Err(message) => error_message.set(Some(message)),
        }
        configurator.update(|s| s.adding = false);
    };

    let navigate_cart = navigate.clone();
    let on_go_to_cart = Callback::new(move |()| {
        navigate_cart("/cart", NavigateOptions::default());
    });
    let on_success_close = Callback::new(move |()| show_success.set(false));
    let on_error_close = Callback::new(move |()| error_message.set(None));

    view! {
        <Seo
            title="Personalizar Cuchillo - Diseña tu Cuchillo Único | FiloSharp"
            description="Crea tu cuchillo personalizado paso a paso. Elige tipo, material de hoja, mango, grabado y accesorios. Forjado artesanalmente para ti."
            keywords="cuchillo personalizado, diseñar cuchillo, cuchillo a medida, grabado personalizado, acero damasco, cuchillo artesanal"
        />

        <div class="customizer">
            <header class="customizer__header">
                <a href="/" class="customizer__brand">
                    "FILO" <span class="customizer__brand-accent">"SHARP"</span>
                </a>
                <a href="/" class="customizer__back">"← Volver a la tienda"</a>
            </header>

            <section class="customizer__hero">
                <h1>"Diseña tu cuchillo perfecto"</h1>
                <p>
                    "Crea un cuchillo único que refleje tu estilo y personalidad. \
                     Cada pieza es forjada a mano por nuestros maestros artesanos."
                </p>
            </section>

            <StepPills configurator=configurator/>

            <div class="customizer__columns">
                <section class="customizer__panel">
                    <StepContent configurator=configurator on_add_to_cart=Callback::new(on_add_to_cart)/>

                    <div class="customizer__nav">
                        <button
                            class="btn customizer__prev"
                            disabled=move || step() == WizardStep::KnifeType
                            on:click=on_previous
                        >
                            "Anterior"
                        </button>
                        <button
                            class="btn btn--primary customizer__next"
                            disabled=move || step() == WizardStep::Summary
                            on:click=on_next
                        >
                            "Siguiente"
                        </button>
                    </div>
                </section>

                <aside class="customizer__preview">
                    <PreviewHost/>

                    <div class="customizer__price-panel">
                        <div>
                            <h3>"Precio actual"</h3>
                            <p>"Se actualiza en tiempo real"</p>
                        </div>
                        <span class="customizer__price">
                            {move || price_label(f64::from(price()))}
                        </span>
                    </div>

                    <div class="customizer__benefits">
                        <h3>"¿Por qué personalizar?"</h3>
                        <ul>
                            <li>"🎨 Diseño único y personal"</li>
                            <li>"⚒️ Artesanía tradicional"</li>
                            <li>"🏆 Calidad garantizada de por vida"</li>
                            <li>"🚚 Envío gratuito incluido"</li>
                        </ul>
                    </div>
                </aside>
            </div>

            <Show when=move || show_success.get()>
                <SuccessModal on_close=on_success_close on_go_to_cart=on_go_to_cart/>
            </Show>
            <Show when=move || error_message.get().is_some()>
                <ErrorModal
                    message=Signal::derive(move || error_message.get().unwrap_or_default())
                    on_close=on_error_close
                />
            </Show>
        </div>
    }
}

// =============================================================
// Step chrome
// =============================================================

/// Clickable progress pills; any step can be jumped to directly.
#[component]
fn StepPills(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    view! {
        <div class="customizer__steps">
            {WizardStep::ALL
                .into_iter()
                .map(|pill| {
                    let index = pill.index();
                    view! {
                        <button
                            class="customizer__step-pill"
                            class:customizer__step-pill--current=move || {
                                configurator.get().step == pill
                            }
                            class:customizer__step-pill--done=move || {
                                index < configurator.get().step.index()
                            }
                            on:click=move |_| {
                                configurator.update(|s| s.step = WizardStep::from_index(index));
                            }
                        >
                            <span class="customizer__step-icon">{pill.icon()}</span>
                            <span class="customizer__step-title">{pill.title()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// The active step's form.
#[component]
fn StepContent(
    configurator: RwSignal<ConfiguratorState>,
    on_add_to_cart: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    move || match configurator.get().step {
        WizardStep::KnifeType => view! { <TypeStep configurator=configurator/> }.into_any(),
        WizardStep::Blade => view! { <BladeStep configurator=configurator/> }.into_any(),
        WizardStep::Handle => view! { <HandleStep configurator=configurator/> }.into_any(),
        WizardStep::Engraving => view! { <EngravingStep configurator=configurator/> }.into_any(),
        WizardStep::Accessories => view! { <AccessoriesStep configurator=configurator/> }.into_any(),
        WizardStep::Summary => {
            view! { <SummaryStep configurator=configurator on_add_to_cart=on_add_to_cart/> }.into_any()
        }
    }
}

// =============================================================
// Steps
// =============================================================

#[component]
fn TypeStep(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    view! {
        <div class="customizer-step">
            <h3>"Selecciona el tipo de cuchillo"</h3>
            <div class="customizer-step__cards">
                {KnifeKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="option-card"
                                class:option-card--selected=move || {
                                    configurator.get().config.kind == kind
                                }
                                on:click=move |_| {
                                    configurator.update(|s| s.config.set_kind(kind));
                                }
                            >
                                <h4>{kind.label()}</h4>
                                <p>{kind.description()}</p>
                                <span class="option-card__price">
                                    {price_label(f64::from(kind.base_price()))}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn BladeStep(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    view! {
        <div class="customizer-step">
            <h3>"Personaliza la hoja"</h3>

            <h4>"Material de la hoja"</h4>
            <div class="customizer-step__cards">
                {BladeMaterial::ALL
                    .into_iter()
                    .map(|material| {
                        view! {
                            <button
                                class="option-card"
                                class:option-card--selected=move || {
                                    configurator.get().config.blade.material == material
                                }
                                on:click=move |_| {
                                    configurator.update(|s| s.config.set_blade_material(material));
                                }
                            >
                                <h5>{material.label()}</h5>
                                <span class="option-card__price">
                                    {format!("+${}", material.surcharge())}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <h4>"Longitud de la hoja"</h4>
            <div class="customizer-step__lengths">
                {BladeLength::ALL
                    .into_iter()
                    .map(|length| {
                        view! {
                            <button
                                class="btn customizer-step__length"
                                class:customizer-step__length--selected=move || {
                                    configurator.get().config.blade.length == length
                                }
                                on:click=move |_| {
                                    configurator.update(|s| s.config.set_blade_length(length));
                                }
                            >
                                {length.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn HandleStep(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    view! {
        <div class="customizer-step">
            <h3>"Diseña el mango"</h3>

            <h4>"Material del mango"</h4>
            <div class="customizer-step__cards">
                {HandleMaterial::ALL
                    .into_iter()
                    .map(|material| {
                        view! {
                            <button
                                class="option-card"
                                class:option-card--selected=move || {
                                    configurator.get().config.handle.material == material
                                }
                                on:click=move |_| {
                                    configurator.update(|s| s.config.set_handle_material(material));
                                }
                            >
                                <span
                                    class="option-card__swatch"
                                    style:background-color=material.swatch()
                                ></span>
                                <h5>{material.label()}</h5>
                                <span class="option-card__price">
                                    {format!("+${}", material.surcharge())}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn EngravingStep(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    view! {
        <div class="customizer-step">
            <h3>"Grabado personalizado"</h3>

            <div class="customizer-step__note">
                "✨ Agrega un toque personal a tu cuchillo con grabado láser de alta precisión"
            </div>

            <label class="customizer-step__field">
                "Texto del grabado"
                <input
                    type="text"
                    maxlength=MAX_ENGRAVING_CHARS
                    placeholder="Ej: Chef Rodriguez, Mi cocina"
                    prop:value=move || configurator.get().config.engraving.text.clone()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        configurator.update(|s| s.config.set_engraving_text(&value));
                    }
                />
                <span class="customizer-step__hint">"Máximo 20 caracteres - +$75"</span>
            </label>

            <label class="customizer-step__field">
                "Color del grabado"
                <select
                    prop:value=move || configurator.get().config.engraving.color.clone()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        configurator.update(|s| s.config.set_engraving_color(&value));
                    }
                >
                    <option value="#000000">"Negro"</option>
                    <option value="#ffffff">"Blanco"</option>
                    <option value="#ffd700">"Dorado"</option>
                    <option value="#888888">"Gris claro"</option>
                </select>
            </label>

            <h4>"Posición del grabado"</h4>
            <div class="customizer-step__positions">
                {[
                    (EngravingPosition::Blade, "En la hoja"),
                    (EngravingPosition::Handle, "En el mango"),
                ]
                    .into_iter()
                    .map(|(position, label)| {
                        view! {
                            <button
                                class="btn customizer-step__position"
                                class:customizer-step__position--selected=move || {
                                    configurator.get().config.engraving.position == position
                                }
                                on:click=move |_| {
                                    configurator
                                        .update(|s| s.config.set_engraving_position(position));
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn AccessoriesStep(configurator: RwSignal<ConfiguratorState>) -> impl IntoView {
    let rows = [
        (
            Accessory::Sheath,
            "Funda de cuero artesanal",
            "Protección elegante para tu cuchillo",
            120_u32,
        ),
        (
            Accessory::Box,
            "Caja de presentación",
            "Caja de madera con grabado para regalo",
            80,
        ),
        (
            Accessory::Certificate,
            "Certificado de autenticidad",
            "Documento que garantiza la calidad artesanal",
            0,
        ),
    ];

    let is_included = move |accessory: Accessory| {
        let accessories = configurator.get().config.accessories;
        match accessory {
            Accessory::Sheath => accessories.sheath,
            Accessory::Box => accessories.presentation_box,
            Accessory::Certificate => accessories.certificate,
        }
    };

    view! {
        <div class="customizer-step">
            <h3>"Accesorios y extras"</h3>
            <div class="customizer-step__accessories">
                {rows
                    .into_iter()
                    .map(|(accessory, title, description, surcharge)| {
                        view! {
                            <label class="accessory-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_included(accessory)
                                    on:change=move |ev| {
                                        let included = event_target_checked(&ev);
                                        configurator
                                            .update(|s| s.config.set_accessory(accessory, included));
                                    }
                                />
                                <div class="accessory-row__text">
                                    <h5>{title}</h5>
                                    <p>{description}</p>
                                </div>
                                <span class="accessory-row__price">
                                    {if surcharge == 0 {
                                        "Gratis".to_owned()
                                    } else {
                                        format!("+${surcharge}")
                                    }}
                                </span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn SummaryStep(
    configurator: RwSignal<ConfiguratorState>,
    on_add_to_cart: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    let config = move || configurator.get().config;

    view! {
        <div class="customizer-step">
            <h3>"Resumen de tu cuchillo personalizado"</h3>

            <div class="customizer-summary">
                <dl>
                    <dt>"Tipo de cuchillo"</dt>
                    <dd>{move || config().kind.name()}</dd>
                    <dt>"Hoja"</dt>
                    <dd>
                        {move || {
                            let c = config();
                            format!("{} - {}", c.blade.material.name(), c.blade.length.label())
                        }}
                    </dd>
                    <dt>"Mango"</dt>
                    <dd>{move || config().handle.material.name()}</dd>
                    <Show when=move || !config().engraving.text.is_empty()>
                        <dt>"Grabado"</dt>
                        <dd>
                            {move || {
                                let c = config();
                                format!(
                                    "\"{}\" en {}",
                                    c.engraving.text,
                                    c.engraving.position.phrase(),
                                )
                            }}
                        </dd>
                    </Show>
                </dl>

                <div class="customizer-summary__accessories">
                    <h4>"Accesorios incluidos"</h4>
                    <ul>
                        {move || {
                            config()
                                .accessories
                                .included_names()
                                .into_iter()
                                .map(|name| view! { <li>"✓ " {name}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </div>

            <div class="customizer-summary__total">
                <div class="customizer-summary__total-row">
                    <h4>"Total"</h4>
                    <span class="customizer-summary__amount">
                        {move || price_label(f64::from(config().price()))}
                    </span>
                </div>
                <p>"Tiempo de elaboración: 4-6 semanas | Envío gratuito incluido"</p>
                <button
                    class="btn btn--primary customizer-summary__add"
                    disabled=move || configurator.get().adding
                    on:click=move |ev| on_add_to_cart.run(ev)
                >
                    {move || {
                        if configurator.get().adding {
                            "Agregando al carrito...".to_owned()
                        } else {
                            format!(
                                "Añadir al carrito - {}",
                                price_label(f64::from(configurator.get().config.price())),
                            )
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

// =============================================================
// Modals
// =============================================================

/// Confirmation dialog after a successful commit: keep customizing or jump
/// to the cart.
#[component]
fn SuccessModal(on_close: Callback<()>, on_go_to_cart: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__icon dialog__icon--success">"✓"</div>
                <h3>"¡Cuchillo agregado al carrito!"</h3>
                <p>"Tu cuchillo personalizado ha sido agregado correctamente."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Continuar personalizando"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            on_go_to_cart.run(());
                            on_close.run(());
                        }
                    >
                        "Ver carrito"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Error dialog for a failed commit; the configuration is left untouched so
/// the user can retry.
#[component]
fn ErrorModal(message: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__icon dialog__icon--error">"!"</div>
                <h3>"Error"</h3>
                <p>{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
