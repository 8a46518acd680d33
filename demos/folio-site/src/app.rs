//! Application components and pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos::server_fn::error::ServerFnError;

use folio_router::{path, site_routes, Route, Router, Routes};

use crate::content::{self, format_date};
use crate::inquiry::{InquiryFlow, InquiryStep, ProjectType};
use crate::particles::ParticleBackground;
use crate::shop::ShopDemoPage;

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::view;
    use leptos::hydration::{AutoReload, HydrationScripts};

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio_site.css"/>
        <Meta name="description" content="Arjun Mehta - full-stack developer in Pune. Projects, writing, and interactive demos."/>
        <Title text="Arjun Mehta - Portfolio"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/projects") view=ProjectsPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/blog/:slug") view=BlogPostPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/demos") view=DemosPage/>
                    <Route path=path!("/demos/shop") view=ShopDemoPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let registry = site_routes();
    let links = registry
        .nav_routes()
        .into_iter()
        .map(|route| {
            let href = route.path.clone();
            let title = route.meta.title.clone().unwrap_or_else(|| route.path.clone());
            view! { <a href=href>{title}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <a class="brand" href="/">"Arjun Mehta"</a>
            <nav>{links}</nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Handmade in Pune with Rust, Leptos, and too much chai."</p>
            <p class="footer-fine">
                <a href="https://github.com/arjunm-dev">"GitHub"</a>
                " / "
                <a href="mailto:arjun.mehta.dev@gmail.com">"Email"</a>
            </p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page: hero over the particle field, then shortcuts.
#[component]
fn HomePage() -> impl IntoView {
    let featured: Vec<_> = content::projects().into_iter().take(2).collect();
    let recent: Vec<_> = content::blog_posts().into_iter().take(2).collect();

    view! {
        <div class="hero">
            <ParticleBackground/>
            <div class="hero-copy">
                <h1>"Hi, I'm Arjun."</h1>
                <p>{content::BIO_SHORT}</p>
                <div class="hero-actions">
                    <a class="btn-primary" href="/projects">"See my work"</a>
                    <a class="btn-ghost" href="/demos">"Play with the demos"</a>
                </div>
            </div>
        </div>

        <section class="page home-strip">
            <h2>"Featured projects"</h2>
            <div class="project-grid">
                {featured.into_iter().map(|p| view! { <ProjectCard project=p/> }).collect::<Vec<_>>()}
            </div>

            <h2>"Recent writing"</h2>
            <div class="post-list">
                {recent.into_iter().map(|p| view! { <PostCard post=p/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about-page">
            <h1>"About"</h1>
            {content::BIO_LONG
                .iter()
                .map(|para| view! { <p>{*para}</p> })
                .collect::<Vec<_>>()}
            <p>
                <a class="btn-ghost" href="/demos/resume/resume.pdf">"Download my resume (PDF)"</a>
            </p>
        </section>
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    let inquiry_open = RwSignal::new(false);

    view! {
        <section class="page projects-page">
            <header class="page-head">
                <h1>"Projects"</h1>
                <button class="btn-primary" on:click=move |_| inquiry_open.set(true)>
                    "Discuss a project"
                </button>
            </header>
            <div class="project-grid">
                {content::projects()
                    .into_iter()
                    .map(|p| view! { <ProjectCard project=p/> })
                    .collect::<Vec<_>>()}
            </div>
            <InquiryModal open=inquiry_open/>
        </section>
    }
}

#[component]
fn BlogPage() -> impl IntoView {
    view! {
        <section class="page blog-page">
            <h1>"Blog"</h1>
            <div class="post-list">
                {content::blog_posts()
                    .into_iter()
                    .map(|p| view! { <PostCard post=p/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn BlogPostPage() -> impl IntoView {
    let params = folio_router::use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        {move || match content::find_post(&slug()) {
            Some(post) => view! {
                <article class="page blog-post">
                    <h1>{post.title}</h1>
                    <p class="post-date">{format_date(post.date)}</p>
                    {post
                        .paragraphs
                        .iter()
                        .map(|para| view! { <p>{*para}</p> })
                        .collect::<Vec<_>>()}
                    <a href="/blog">"\u{2190} All posts"</a>
                </article>
            }.into_any(),
            None => view! { <NotFound/> }.into_any(),
        }}
    }
}

/// Contact page. Validation is the browser's: the fields are `required`,
/// nothing more.
#[component]
fn ContactPage() -> impl IntoView {
    let send_message = ServerAction::<SendContactMessage>::new();
    let pending = send_message.pending();
    let value = send_message.value();

    view! {
        <section class="page contact-page">
            <h1>"Contact"</h1>
            <p>"Got a project, a question, or a better chai recommendation? Write to me."</p>
            <ActionForm action=send_message>
                <label>
                    "Name"
                    <input type="text" name="name" required/>
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" required/>
                </label>
                <label>
                    "Message"
                    <textarea name="message" rows="6" required></textarea>
                </label>
                <button type="submit" class="btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Sending..." } else { "Send message" }}
                </button>
            </ActionForm>
            {move || value.get().map(|result| match result {
                Ok(_) => view! {
                    <p class="form-ok">"Thanks! I usually reply within a day."</p>
                }.into_any(),
                Err(e) => view! {
                    <p class="form-error">"Sending failed: " {e.to_string()}</p>
                }.into_any(),
            })}
        </section>
    }
}

/// Index of the demo pages. The shop lives in this app; the others are
/// self-contained pages streamed from their own components.
#[component]
fn DemosPage() -> impl IntoView {
    view! {
        <section class="page demos-page">
            <h1>"Demos"</h1>
            <p>"Small, self-contained UI exercises. Nothing here persists anything."</p>
            <div class="demo-grid">
                <DemoCard
                    href="/demos/shop"
                    name="Shop"
                    blurb="Catalog, cart, currencies. The only demo with real state transitions."
                />
                <DemoCard
                    href="/demos/weather"
                    name="Weather"
                    blurb="Live lookups when a key is configured, a bundled city table when not."
                />
                <DemoCard
                    href="/demos/tasks"
                    name="Task Board"
                    blurb="A three-column board that forgets everything between visits."
                />
                <DemoCard
                    href="/demos/resume"
                    name="Resume Studio"
                    blurb="A printable resume and its PDF, generated on the fly if need be."
                />
            </div>
        </section>
    }
}

#[component]
fn DemoCard(href: &'static str, name: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <a class="demo-card" href=href>
            <h3>{name}</h3>
            <p>{blurb}</p>
        </a>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"That page wandered off."</p>
            <a href="/">"Back home"</a>
        </div>
    }
}

// ============================================================================
// Cards
// ============================================================================

#[component]
fn ProjectCard(project: content::Project) -> impl IntoView {
    let stack = project.stack.join(" \u{00b7} ");

    view! {
        <div class="project-card">
            <h3>{project.name}</h3>
            <p>{project.summary}</p>
            <p class="project-stack">{stack}</p>
            {project.link.map(|href| view! { <a href=href>"View project \u{2192}"</a> })}
        </div>
    }
}

#[component]
fn PostCard(post: content::BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.slug);

    view! {
        <a class="post-card" href=href>
            <h3>{post.title}</h3>
            <p class="post-date">{format_date(post.date)}</p>
            <p>{post.excerpt}</p>
        </a>
    }
}

// ============================================================================
// Project Inquiry Modal
// ============================================================================

/// The multi-step project-discussion modal, driven by [`InquiryFlow`].
#[component]
fn InquiryModal(open: RwSignal<bool>) -> impl IntoView {
    let flow = RwSignal::new(InquiryFlow::new());
    let send_inquiry = ServerAction::<SendProjectInquiry>::new();

    // Delivery success is what moves Review to Sent; a failure leaves the
    // flow on Review with the error shown, ready to resend.
    Effect::new(move |_| {
        if matches!(send_inquiry.value().get(), Some(Ok(()))) {
            flow.update(|f| {
                let _ = f.advance();
            });
        }
    });

    let close = move || {
        open.set(false);
        flow.set(InquiryFlow::new());
        send_inquiry.value().set(None);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close()></div>
            <div class="modal" role="dialog" aria-label="Project inquiry">
                <div class="modal-head">
                    <StepIndicator flow=flow/>
                    <button class="modal-close" on:click=move |_| close()>"\u{00d7}"</button>
                </div>
                <div
                    class="progress-bar"
                    style=move || format!("width: {}%", flow.get().progress_percent())
                ></div>

                {move || match flow.get().step {
                    InquiryStep::ProjectType => view! { <ProjectTypeStep flow=flow/> }.into_any(),
                    InquiryStep::Scope => view! { <ScopeStep flow=flow/> }.into_any(),
                    InquiryStep::Contact => view! { <ContactStep flow=flow/> }.into_any(),
                    InquiryStep::Review => {
                        view! { <ReviewStep flow=flow action=send_inquiry/> }.into_any()
                    }
                    InquiryStep::Sent => view! { <SentStep/> }.into_any(),
                }}

                <div class="modal-nav">
                    {move || {
                        let step = flow.get().step;
                        (step != InquiryStep::ProjectType && step != InquiryStep::Sent).then(|| {
                            view! {
                                <button
                                    class="btn-ghost"
                                    on:click=move |_| flow.update(|f| {
                                        let _ = f.go_back();
                                    })
                                >
                                    "Back"
                                </button>
                            }
                        })
                    }}
                    {move || {
                        (flow.get().step.number() <= 3).then(|| {
                            view! {
                                <button
                                    class="btn-primary"
                                    disabled=move || flow.get().advance().is_err()
                                    on:click=move |_| flow.update(|f| {
                                        let _ = f.advance();
                                    })
                                >
                                    "Continue"
                                </button>
                            }
                        })
                    }}
                </div>
            </div>
        </Show>
    }
}

/// The step strip along the top of the modal. Completed steps are clickable.
#[component]
fn StepIndicator(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    const STEPS: [InquiryStep; 5] = [
        InquiryStep::ProjectType,
        InquiryStep::Scope,
        InquiryStep::Contact,
        InquiryStep::Review,
        InquiryStep::Sent,
    ];

    view! {
        <ol class="step-strip">
            {STEPS
                .into_iter()
                .map(|step| {
                    view! {
                        <li
                            class=move || {
                                let f = flow.get();
                                if f.step == step {
                                    "step current"
                                } else if f.completed_steps.contains(&step) {
                                    "step done"
                                } else {
                                    "step"
                                }
                            }
                            on:click=move |_| flow.update(|f| {
                                let _ = f.go_to(step);
                            })
                        >
                            {step.display_name()}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}

#[component]
fn ProjectTypeStep(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    view! {
        <div class="step-body">
            <h3>"What are we building?"</h3>
            <div class="type-grid">
                {ProjectType::ALL
                    .into_iter()
                    .map(|pt| {
                        view! {
                            <button
                                class=move || {
                                    if flow.get().project_type == Some(pt) {
                                        "type-card selected"
                                    } else {
                                        "type-card"
                                    }
                                }
                                on:click=move |_| flow.update(|f| f.set_project_type(pt))
                            >
                                {pt.display_name()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn ScopeStep(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    const BUDGETS: [&str; 4] = ["Under \u{20b9}1L", "\u{20b9}1-3L", "\u{20b9}3-8L", "\u{20b9}8L+"];
    const TIMELINES: [&str; 4] = ["2-4 weeks", "1-3 months", "3-6 months", "Flexible"];

    view! {
        <div class="step-body">
            <h3>"Rough scope"</h3>
            <label>
                "Budget"
                <select on:change=move |ev| flow.update(|f| f.set_budget(event_target_value(&ev)))>
                    <option value="" disabled selected=move || flow.get().budget.is_none()>
                        "Pick a range"
                    </option>
                    {BUDGETS
                        .into_iter()
                        .map(|b| {
                            view! {
                                <option value=b selected=move || flow.get().budget.as_deref() == Some(b)>
                                    {b}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label>
                "Timeline"
                <select on:change=move |ev| flow.update(|f| f.set_timeline(event_target_value(&ev)))>
                    <option value="" disabled selected=move || flow.get().timeline.is_none()>
                        "Pick a timeline"
                    </option>
                    {TIMELINES
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option value=t selected=move || flow.get().timeline.as_deref() == Some(t)>
                                    {t}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </div>
    }
}

#[component]
fn ContactStep(flow: RwSignal<InquiryFlow>) -> impl IntoView {
    view! {
        <div class="step-body">
            <h3>"How do I reach you?"</h3>
            <label>
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || flow.get().name
                    on:input=move |ev| flow.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    required
                    prop:value=move || flow.get().email
                    on:input=move |ev| flow.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label>
                "Anything else?"
                <textarea
                    rows="4"
                    prop:value=move || flow.get().message
                    on:input=move |ev| flow.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn ReviewStep(
    flow: RwSignal<InquiryFlow>,
    action: ServerAction<SendProjectInquiry>,
) -> impl IntoView {
    let pending = action.pending();

    view! {
        <div class="step-body">
            <h3>"Look right?"</h3>
            <dl class="review-list">
                <dt>"Project"</dt>
                <dd>
                    {move || {
                        flow.get()
                            .project_type
                            .map(|pt| pt.display_name())
                            .unwrap_or("-")
                    }}
                </dd>
                <dt>"Budget"</dt>
                <dd>{move || flow.get().budget.unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Timeline"</dt>
                <dd>{move || flow.get().timeline.unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Name"</dt>
                <dd>{move || flow.get().name}</dd>
                <dt>"Email"</dt>
                <dd>{move || flow.get().email}</dd>
            </dl>
            <button
                class="btn-primary"
                disabled=move || pending.get()
                on:click=move |_| {
                    let f = flow.get_untracked();
                    action.dispatch(SendProjectInquiry {
                        project_type: f
                            .project_type
                            .map(|pt| pt.display_name().to_string())
                            .unwrap_or_default(),
                        budget: f.budget.unwrap_or_default(),
                        timeline: f.timeline.unwrap_or_default(),
                        name: f.name,
                        email: f.email,
                        message: f.message,
                    });
                }
            >
                {move || if pending.get() { "Sending..." } else { "Send inquiry" }}
            </button>
            {move || {
                action.value().get().and_then(|result| {
                    result.err().map(|e| {
                        view! {
                            <p class="form-error">"Sending failed: " {e.to_string()}</p>
                        }
                    })
                })
            }}
        </div>
    }
}

#[component]
fn SentStep() -> impl IntoView {
    view! {
        <div class="step-body sent-body">
            <h3>"Inquiry sent"</h3>
            <p>"Thanks - I'll read it properly and get back to you within a day or two."</p>
        </div>
    }
}

// ============================================================================
// Server Functions (API)
// ============================================================================

/// Deliver the contact-form message. One attempt, no retry; failure comes
/// back to the form as-is.
#[leptos::server(prefix = "/api")]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        deliver_email(
            "New contact message",
            serde_json::json!({
                "name": name,
                "reply_to": email,
                "message": message,
            }),
        )
        .await
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = (name, email, message);
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Deliver a project inquiry from the modal.
#[leptos::server(prefix = "/api")]
pub async fn send_project_inquiry(
    project_type: String,
    budget: String,
    timeline: String,
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        deliver_email(
            "New project inquiry",
            serde_json::json!({
                "project_type": project_type,
                "budget": budget,
                "timeline": timeline,
                "name": name,
                "reply_to": email,
                "message": message,
            }),
        )
        .await
    }

    #[cfg(not(feature = "ssr"))]
    {
        let _ = (project_type, budget, timeline, name, email, message);
        Err(ServerFnError::new("Server-only function"))
    }
}

/// POST a payload to the transactional email provider.
#[cfg(feature = "ssr")]
async fn deliver_email(subject: &str, fields: serde_json::Value) -> Result<(), ServerFnError> {
    use folio_core::RequestId;
    use folio_data::{DependencyTag, FetchClient};

    let config = email_config()
        .ok_or_else(|| ServerFnError::new("Email delivery is not configured"))?;

    let payload = serde_json::json!({
        "access_key": config.access_key,
        "to": config.to_address,
        "subject": subject,
        "fields": fields,
    });

    let client = FetchClient::new(RequestId::generate());
    let _: serde_json::Value = client
        .post_json(&config.endpoint, &payload, DependencyTag::Email)
        .await
        .map_err(|e| ServerFnError::new(format!("Email delivery failed: {e}")))?;

    Ok(())
}

/// Read the email provider config from Spin variables.
#[cfg(feature = "ssr")]
fn email_config() -> Option<folio_core::EmailConfig> {
    let endpoint = spin_sdk::variables::get("email_endpoint")
        .ok()
        .filter(|v| !v.is_empty())?;
    let access_key = spin_sdk::variables::get("email_access_key")
        .ok()
        .filter(|v| !v.is_empty())?;
    let to_address = spin_sdk::variables::get("email_to_address")
        .ok()
        .filter(|v| !v.is_empty())?;
    Some(folio_core::EmailConfig::new(endpoint, access_key, to_address))
}
