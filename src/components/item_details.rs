//! Item Details View
//!
//! One idea's page: overview, price card and the like/save/share/contact
//! actions. Likes are optimistic and roll back on failure.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use market_core::detail::{contact_target, load_detail};
use market_core::social::{record_share, toggle_like, toggle_save};
use market_core::{DetailRecord, MarketError, SocialState, Viewer};

use crate::browser;
use crate::components::{IdeaOverview, LoadingPanel, ShareModal};
use crate::context::use_app_context;
use crate::format::{display_username, format_price};
use crate::navigation;
use crate::store::{use_app_store, AppStateStoreFields, SignalSocial};

/// How long "Copied to Clipboard!" stays up
const COPIED_MS: u32 = 2_000;
/// Grace period before a signed-out visitor is sent to the login page
const LOGIN_REDIRECT_MS: u32 = 500;

#[component]
pub fn ItemDetails(idea_id: String, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let idea_id = StoredValue::new(idea_id);
    let (record, set_record) = signal(None::<DetailRecord>);
    let (viewer, set_viewer) = signal(None::<Viewer>);
    let social = RwSignal::new(SocialState::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (share_open, set_share_open) = signal(false);
    let (copied, set_copied) = signal(false);

    // Signed-out visitors are redirected once the user lookup settled
    Effect::new(move |_| {
        if store.viewer_checked().get() && store.viewer().get().is_none() {
            spawn_local(async move {
                TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
                if store.viewer().get_untracked().is_none() {
                    browser::navigate(navigation::LOGIN_PAGE);
                }
            });
        }
    });

    // Load record and social state
    spawn_local(async move {
        let backend = ctx.backend();
        let id = idea_id.get_value();
        match load_detail(backend.as_ref(), &id).await {
            Ok(snapshot) => {
                set_record.set(Some(snapshot.record));
                set_viewer.set(snapshot.viewer);
                social.set(snapshot.social);
            }
            Err(e) => {
                log::error!("failed to load idea {id}: {e}");
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    // Prompts go to an alert, failures to the inline notice
    let report = move |err: MarketError| {
        if err.is_prompt() {
            browser::alert(&err.to_string());
        } else {
            log::error!("action failed: {err}");
            set_notice.set(Some(err.to_string()));
        }
    };

    let on_like = move |_| {
        set_notice.set(None);
        let backend = ctx.backend();
        let viewer = viewer.get_untracked();
        spawn_local(async move {
            let store = SignalSocial(social);
            if let Err(e) = toggle_like(backend.as_ref(), &store, &idea_id.get_value(), viewer.as_ref()).await {
                report(e);
            }
        });
    };

    let on_save = move |_| {
        set_notice.set(None);
        let backend = ctx.backend();
        let viewer = viewer.get_untracked();
        spawn_local(async move {
            let store = SignalSocial(social);
            if let Err(e) = toggle_save(backend.as_ref(), &store, &idea_id.get_value(), viewer.as_ref()).await {
                report(e);
            }
        });
    };

    let on_copy = Callback::new(move |_: ()| {
        let backend = ctx.backend();
        let viewer = viewer.get_untracked();
        spawn_local(async move {
            if let Err(e) = browser::copy_to_clipboard(&browser::current_href()).await {
                log::warn!("{e}");
            }
            set_copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_MS).await;
                set_copied.set(false);
            });

            let store = SignalSocial(social);
            if let Err(e) = record_share(backend.as_ref(), &store, &idea_id.get_value(), viewer.as_ref()).await {
                report(e);
            }
        });
    });

    let on_contact = move |_| {
        let Some(record) = record.get_untracked() else {
            return;
        };
        match contact_target(viewer.get_untracked().as_ref(), &record) {
            Ok(target) => {
                log::info!("opening chat with {}", target.user_id);
                if let Err(e) = browser::open_chat(&target) {
                    log::error!("{e}");
                }
            }
            Err(e) => browser::alert(&e.to_string()),
        }
    };

    let back_button = move || view! {
        <button class="back-btn" on:click=move |_| on_back.run(())>
            "← Back to Marketplace"
        </button>
    };

    view! {
        <div class="item-details">
            {move || {
                if loading.get() {
                    return view! { <LoadingPanel message="Loading idea details..." /> }.into_any();
                }
                let Some(item) = record.get().filter(|_| error.get().is_none()) else {
                    let message = error.get().unwrap_or_else(|| MarketError::NotFound.to_string());
                    return view! {
                        {back_button()}
                        <div class="error-panel large">
                            <p class="error-text">{message}</p>
                            <button class="link-btn" on:click=move |_| on_back.run(())>
                                "Return to Marketplace →"
                            </button>
                        </div>
                    }.into_any();
                };

                let seller_profile = item.user_id.as_deref().map(navigation::profile_url);
                let mvp = item.mvp;
                view! {
                    {back_button()}
                    <div class="details-layout">
                        <IdeaOverview record=item.clone() />

                        <aside class="price-card">
                            <div class="price-row">
                                <div>
                                    <div class="card-price-label">"Asking price"</div>
                                    <div class="detail-price">{format_price(item.price)}</div>
                                </div>
                                <span class="card-username">{display_username(&item.username)}</span>
                            </div>

                            <Show when=move || mvp>
                                <div class="mvp-banner">"MVP Available"</div>
                            </Show>

                            <div class="rating-row">
                                <span>"★ " {format!("{:.1}", item.overall_score)}</span>
                                <span class="muted">"AI rating"</span>
                            </div>

                            <div class="cta-column">
                                <button class="cta primary">"Buy Now"</button>
                                <button class="cta secondary" on:click=on_contact>"Message Seller"</button>
                                {seller_profile.map(|href| view! {
                                    <a class="seller-link" href=href>"View Seller Profile →"</a>
                                })}
                            </div>

                            <div class="social-actions">
                                <button
                                    class=move || if social.with(SocialState::liked) { "social-btn liked" } else { "social-btn" }
                                    on:click=on_like
                                >
                                    {move || if social.with(SocialState::liked) { "♥" } else { "♡" }}
                                    " "
                                    {move || social.with(SocialState::like_count)}
                                </button>
                                <button
                                    class=move || if social.with(SocialState::saved) { "social-btn saved" } else { "social-btn" }
                                    on:click=on_save
                                >
                                    {move || if social.with(SocialState::saved) { "Saved" } else { "Save" }}
                                </button>
                                <button class="social-btn" on:click=move |_| set_share_open.set(true)>
                                    "Share " {move || social.with(SocialState::share_count)}
                                </button>
                            </div>

                            {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
                        </aside>
                    </div>
                }.into_any()
            }}

            <Show when=move || share_open.get()>
                <ShareModal
                    url=browser::current_href()
                    copied=copied
                    on_copy=on_copy
                    on_close=Callback::new(move |_| set_share_open.set(false))
                />
            </Show>
        </div>
    }
}
