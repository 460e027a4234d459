use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{filter_projects, teaser_projects, teaser_tabs, ProjectFilter, Text, SERVICES};
use crate::components::contact_form::ContactSection;
use crate::components::layout::{use_document_title, PageLayout};
use crate::components::reveal::{reveal_classes, stagger_style, use_in_view, REVEAL_THRESHOLD};
use crate::i18n::use_language;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_document_title("Alpha Core Solutions | Advanced Physical Security | Saudi Arabia".to_string());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <PageLayout>
            <Hero />
            <Mission />
            <Services />
            <Stats />
            <WhyTrustUs />
            <ProjectsShowcase />
            <Partners />
            <ContactSection />
        </PageLayout>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let language = use_language();
    let font = language.arabic_font();

    html! {
        <section class="hero">
            <div class="hero-overlay" />
            <div class="container-premium hero-content">
                <span class={classes!("eyebrow", "hero-rise", font)}>
                    {language.pick("ADVANCED PHYSICAL SECURITY", "حلول الأمن المادي المتقدمة")}
                </span>
                <h1 class={classes!("text-hero", "hero-rise", language.font("font-display"))}>
                    {language.pick("Securing What Matters Most", "نحمي ما يهمك أكثر")}
                </h1>
                <p class={classes!("hero-subtitle", "hero-rise", font)}>
                    {language.pick(
                        "Integrated surveillance, access control and screening systems for government, corporate and healthcare facilities across the Kingdom.",
                        "أنظمة متكاملة للمراقبة والتحكم بالدخول والفحص الأمني للمنشآت الحكومية والشركات والمرافق الصحية في جميع أنحاء المملكة.",
                    )}
                </p>
                <div class="hero-actions hero-rise">
                    <Link<Route> to={Route::Contact} classes={classes!("btn-premium", font)}>
                        {language.pick("Request Consultation", "اطلب استشارة")}
                    </Link<Route>>
                    <Link<Route> to={Route::Projects} classes={classes!("btn-outline", font)}>
                        {language.pick("View Projects", "شاهد مشاريعنا")}
                    </Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: url(/assets/hero.jpg) center / cover no-repeat;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, rgba(10, 10, 10, 0.95), rgba(10, 10, 10, 0.6));
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 900px;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #d4d4d8;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-rise {
                    opacity: 0;
                    animation: heroRise 0.8s ease-out forwards;
                }
                .hero-rise:nth-child(2) { animation-delay: 0.15s; }
                .hero-rise:nth-child(3) { animation-delay: 0.3s; }
                .hero-rise:nth-child(4) { animation-delay: 0.45s; }
                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}

/// Section heading that slides in when its section is revealed.
#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    eyebrow: Text,
    title: Text,
    revealed: bool,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    let language = use_language();
    html! {
        <div class="section-header">
            <span class={classes!("eyebrow", "reveal", reveal_classes(props.revealed, "translate-y-10"), language.arabic_font())}>
                {props.eyebrow.get(language)}
            </span>
            <h2
                class={classes!("text-section", "reveal", reveal_classes(props.revealed, "translate-y-10"), language.font("font-display"))}
                style="transition-delay: 100ms"
            >
                {props.title.get(language)}
            </h2>
        </div>
    }
}

#[function_component(Mission)]
fn mission() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);
    let font = language.arabic_font();

    let pillars = [
        (
            Text::new("Our Mission", "رسالتنا"),
            Text::new(
                "Deliver security systems that protect people and assets without slowing down the work they do.",
                "تقديم أنظمة أمنية تحمي الأفراد والأصول دون أن تعيق سير أعمالهم.",
            ),
        ),
        (
            Text::new("Our Vision", "رؤيتنا"),
            Text::new(
                "Be the Kingdom's most trusted partner for critical infrastructure protection, in line with Vision 2030.",
                "أن نكون الشريك الأكثر موثوقية لحماية البنية التحتية الحيوية في المملكة، تماشياً مع رؤية 2030.",
            ),
        ),
    ];

    html! {
        <section class="section-padding" ref={node}>
            <div class="container-premium">
                <SectionHeader
                    eyebrow={Text::new("WHO WE ARE", "من نحن")}
                    title={Text::new("Saudi Engineering, Global Standards", "خبرة سعودية بمعايير عالمية")}
                    revealed={revealed}
                />
                <div class="grid-2">
                    { for pillars.iter().enumerate().map(|(index, (title, body))| html! {
                        <div class={classes!("glass-card", "card-pad", "reveal", reveal_classes(revealed, "translate-y-20"))}
                             style={stagger_style(200, index)}>
                            <h3 class={classes!("card-title", font)}>{title.get(language)}</h3>
                            <p class={classes!("muted", font)}>{body.get(language)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);
    let font = language.arabic_font();

    html! {
        <section id="services" class="section-padding" ref={node}>
            <div class="container-premium">
                <SectionHeader
                    eyebrow={Text::new("OUR SERVICES", "خدماتنا")}
                    title={Text::new("End-to-End Security Systems", "أنظمة أمنية متكاملة")}
                    revealed={revealed}
                />
                <div class="grid-3">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div class={classes!("glass-card", "card-pad", "card-hover", "reveal", reveal_classes(revealed, "translate-y-20"))}
                             style={stagger_style(200, index)}>
                            <div class="icon-tile">
                                <img src={service.icon} alt="" />
                            </div>
                            <h3 class={classes!("card-title", font)}>{service.title.get(language)}</h3>
                            <p class={classes!("muted", font)}>{service.description.get(language)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Stats)]
fn stats() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);

    let stats = [
        ("150+", Text::new("Facilities Secured", "منشأة مؤمّنة")),
        ("5,000+", Text::new("Cameras Installed", "كاميرا مركّبة")),
        ("15+", Text::new("Years of Experience", "عاماً من الخبرة")),
        ("24/7", Text::new("Support", "دعم فني")),
    ];

    html! {
        <section class="stats-band" ref={node}>
            <div class="container-premium grid-4">
                { for stats.iter().enumerate().map(|(index, (value, label))| html! {
                    <div class={classes!("stat", "reveal", reveal_classes(revealed, "translate-y-10"))}
                         style={stagger_style(0, index)}>
                        <p class="stat-value gradient-text font-display">{*value}</p>
                        <p class={classes!("muted", language.arabic_font())}>{label.get(language)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(WhyTrustUs)]
fn why_trust_us() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);
    let font = language.arabic_font();

    let reasons = [
        (
            Text::new("Certified Engineers", "مهندسون معتمدون"),
            Text::new(
                "Every installation is designed and commissioned by vendor-certified engineers.",
                "كل مشروع يصممه ويشغّله مهندسون معتمدون من المصنّعين.",
            ),
        ),
        (
            Text::new("Regulatory Compliance", "الامتثال للأنظمة"),
            Text::new(
                "Systems built to HCIS and Civil Defense requirements from day one.",
                "أنظمة مطابقة لمتطلبات الهيئة العليا للأمن الصناعي والدفاع المدني منذ اليوم الأول.",
            ),
        ),
        (
            Text::new("Single Point of Contact", "جهة تواصل واحدة"),
            Text::new(
                "Design, supply, installation and maintenance from one accountable team.",
                "التصميم والتوريد والتركيب والصيانة من فريق واحد مسؤول.",
            ),
        ),
        (
            Text::new("Rapid Response", "استجابة سريعة"),
            Text::new(
                "Emergency support teams on call around the clock.",
                "فرق دعم طارئ جاهزة على مدار الساعة.",
            ),
        ),
    ];

    html! {
        <section class="section-padding" ref={node}>
            <div class="container-premium">
                <SectionHeader
                    eyebrow={Text::new("WHY TRUST US", "لماذا نحن")}
                    title={Text::new("Built for Critical Sites", "مصممون للمواقع الحساسة")}
                    revealed={revealed}
                />
                <div class="grid-2">
                    { for reasons.iter().enumerate().map(|(index, (title, body))| html! {
                        <div class={classes!("glass-card", "card-pad", "reveal", reveal_classes(revealed, "translate-y-20"))}
                             style={stagger_style(200, index)}>
                            <h3 class={classes!("card-title", font)}>{title.get(language)}</h3>
                            <p class={classes!("muted", font)}>{body.get(language)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ProjectsShowcase)]
fn projects_showcase() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);
    let active = use_state(ProjectFilter::default);
    let font = language.arabic_font();

    let projects = teaser_projects();
    let visible = filter_projects(&projects, *active);

    html! {
        <section id="projects" class="section-padding projects-section" ref={node}>
            <div class="container-premium">
                <SectionHeader
                    eyebrow={Text::new("OUR PROJECTS", "مشاريعنا")}
                    title={Text::new("Protecting Saudi Arabia's Critical Infrastructure", "حماية البنية التحتية الحيوية في المملكة العربية السعودية")}
                    revealed={revealed}
                />

                <div class={classes!("filter-row", "reveal", reveal_classes(revealed, "translate-y-10"))}
                     style="transition-delay: 200ms">
                    { for teaser_tabs().into_iter().map(|tab| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(tab.filter))
                        };
                        html! {
                            <button
                                class={classes!("filter-tab", (*active == tab.filter).then(|| "active"), font)}
                                {onclick}
                            >
                                {tab.label.get(language)}
                            </button>
                        }
                    }) }
                </div>

                <div class="grid-3">
                    { for visible.iter().enumerate().map(|(index, project)| html! {
                        <div key={project.id}
                             class={classes!("project-card", "card-hover", "reveal", reveal_classes(revealed, "translate-y-20"))}
                             style={stagger_style(300, index)}>
                            <div class="project-image">
                                <img src={project.image} alt={project.title.get(language)} />
                                <div class="project-shade" />
                                <div class="project-badge">
                                    <span class={classes!(font)}>{project.category.badge().get(language)}</span>
                                </div>
                            </div>
                            <div class="project-body">
                                <div class="project-location">
                                    <span class={classes!(font)}>{project.location.get(language)}</span>
                                </div>
                                <h3 class={classes!("card-title", language.font("font-display"))}>{project.title.get(language)}</h3>
                                <p class={classes!("muted", font)}>{project.description.get(language)}</p>
                                <div class="project-stats">
                                    { for project.stats.iter().map(|stat| html! {
                                        <div class="project-stat">
                                            <p class="stat-small gradient-text font-display">{stat.value}</p>
                                            <p class={classes!("muted", "tiny", font)}>{stat.label.get(language)}</p>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Partners)]
fn partners() -> Html {
    let language = use_language();
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_THRESHOLD);

    let partners = ["Hikvision", "Axis", "Bosch", "HID", "Honeywell", "Smiths Detection"];

    html! {
        <section class="section-padding partners" ref={node}>
            <div class="container-premium">
                <SectionHeader
                    eyebrow={Text::new("TECHNOLOGY PARTNERS", "شركاؤنا في التقنية")}
                    title={Text::new("Working With Industry Leaders", "نعمل مع رواد الصناعة")}
                    revealed={revealed}
                />
                <div class="partner-row">
                    { for partners.iter().enumerate().map(|(index, name)| html! {
                        <div class={classes!("partner", "reveal", reveal_classes(revealed, "translate-y-10"))}
                             style={stagger_style(200, index)}>
                            {*name}
                        </div>
                    }) }
                </div>
                <p class={classes!("muted", "center", language.arabic_font())}>
                    {language.pick(
                        "Authorized integrator for the world's leading security manufacturers.",
                        "مكامل معتمد لكبرى الشركات العالمية المصنعة لأنظمة الأمن.",
                    )}
                </p>
            </div>
        </section>
    }
}
