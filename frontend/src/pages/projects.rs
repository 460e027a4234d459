use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{filter_projects, portfolio_projects, portfolio_tabs, tab_label, ProjectFilter};
use crate::components::layout::{use_document_title, PageLayout};
use crate::components::reveal::{reveal_classes, stagger_style};
use crate::i18n::use_language;
use crate::Route;

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let language = use_language();
    let active = use_state(ProjectFilter::default);
    let revealed = use_state(|| false);
    let font = language.arabic_font();

    use_document_title(
        language
            .pick("Our Projects | Alpha Core Solutions", "مشاريعنا | ألفا كور سوليوشنز")
            .to_string(),
    );

    // The grid is above the fold, so it animates in right after mount.
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                revealed.set(true);
                || ()
            },
            (),
        );
    }

    let tabs = portfolio_tabs();
    let projects = portfolio_projects();
    let visible = filter_projects(&projects, *active);

    html! {
        <PageLayout main_class={classes!("page-top")}>
            <section class="section-padding page-hero">
                <div class="container-premium center">
                    <span class={classes!("eyebrow", font)}>
                        {language.pick("PROJECT PORTFOLIO", "معرض المشاريع")}
                    </span>
                    <h1 class={classes!("text-hero", language.font("font-display"))}>
                        {language.pick("Our Completed Projects", "مشاريعنا المنجزة")}
                    </h1>
                    <p class={classes!("lead", font)}>
                        {language.pick(
                            "Proudly serving over 150 facilities across the Kingdom of Saudi Arabia",
                            "نفخر بخدمة أكثر من 150 منشأة في جميع أنحاء المملكة العربية السعودية",
                        )}
                    </p>
                </div>
            </section>

            <section class="filter-bar">
                <div class="container-premium filter-row">
                    { for tabs.iter().map(|tab| {
                        let filter = tab.filter;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(filter))
                        };
                        html! {
                            <button
                                class={classes!("filter-tab", (*active == filter).then(|| "active"), font)}
                                {onclick}
                            >
                                {tab.label.get(language)}
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section class="section-padding">
                <div class="container-premium">
                    if visible.is_empty() {
                        <p class={classes!("muted", "center", font)}>
                            {language.pick(
                                "No projects in this category yet.",
                                "لا توجد مشاريع في هذه الفئة حالياً.",
                            )}
                        </p>
                    }
                    <div class="grid-3">
                        { for visible.iter().enumerate().map(|(index, project)| {
                            let badge = tab_label(&tabs, project.category).unwrap_or(project.category.badge());
                            html! {
                                <div key={project.id}
                                     class={classes!("project-card", "card-hover", "reveal", reveal_classes(*revealed, "translate-y-20"))}
                                     style={stagger_style(0, index)}>
                                    <div class="project-image">
                                        <img src={project.image} alt={project.title.get(language)} />
                                        <div class="project-shade" />
                                        <div class="project-badge">
                                            <span class={classes!(font)}>{badge.get(language)}</span>
                                        </div>
                                    </div>
                                    <div class="project-body">
                                        <div class="project-location">
                                            <span class={classes!(font)}>{project.location.get(language)}</span>
                                        </div>
                                        <h3 class={classes!("card-title", language.font("font-display"))}>
                                            {project.title.get(language)}
                                        </h3>
                                        <p class={classes!("muted", font)}>{project.description.get(language)}</p>
                                        <div class="tech-row">
                                            { for project.technologies.iter().map(|tech| html! {
                                                <span class="tech-chip">{*tech}</span>
                                            }) }
                                        </div>
                                        <div class="project-stats divided">
                                            { for project.stats.iter().map(|stat| html! {
                                                <div class="project-stat">
                                                    <p class="stat-small gradient-text font-display">{stat.value}</p>
                                                    <p class={classes!("muted", "tiny", font)}>{stat.label.get(language)}</p>
                                                </div>
                                            }) }
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section-padding">
                <div class="container-premium center">
                    <div class="glass-card cta-card">
                        <img class="cta-icon" src="/assets/icons/shield.svg" alt="" />
                        <h2 class={classes!("cta-title", language.font("font-display"))}>
                            {language.pick("Have a Security Project?", "هل لديك مشروع أمني؟")}
                        </h2>
                        <p class={classes!("muted", font)}>
                            {language.pick(
                                "Let's discuss how we can secure your facility with the latest security technologies",
                                "دعنا نناقش كيف يمكننا تأمين منشأتك بأحدث التقنيات الأمنية",
                            )}
                        </p>
                        <Link<Route> to={Route::Contact} classes={classes!("btn-premium", font)}>
                            {language.pick("Request Consultation", "اطلب استشارة")}
                        </Link<Route>>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .filter-bar {
                    position: sticky;
                    top: 5rem;
                    z-index: 30;
                    padding: 2rem 0;
                    background: rgba(10, 10, 10, 0.95);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .tech-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .tech-chip {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    color: #dc2626;
                    background: rgba(220, 38, 38, 0.1);
                    border-radius: 999px;
                }
                .project-stats.divided {
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }
                .cta-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 3rem;
                }
                .cta-icon {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1.5rem;
                }
                .cta-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </PageLayout>
    }
}
