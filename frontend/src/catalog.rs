use crate::i18n::Language;

/// A string with both translations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, language: Language) -> &'static str {
        language.pick(self.en, self.ar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Government,
    Corporate,
    Healthcare,
    Education,
}

impl ProjectCategory {
    /// Short label for the badge on a project card.
    pub fn badge(&self) -> Text {
        match self {
            ProjectCategory::Government => Text::new("Government", "حكومي"),
            ProjectCategory::Corporate => Text::new("Corporate", "شركات"),
            ProjectCategory::Healthcare => Text::new("Healthcare", "صحي"),
            ProjectCategory::Education => Text::new("Education", "تعليم"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(wanted) => *wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: ProjectFilter,
    pub label: Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: Text,
    pub location: Text,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub description: Text,
    pub technologies: Vec<&'static str>,
    pub stats: Vec<Stat>,
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p.category)).collect()
}

/// Label of the tab for `category`, if the tab row has one.
pub fn tab_label(tabs: &[FilterTab], category: ProjectCategory) -> Option<Text> {
    tabs.iter()
        .find(|tab| tab.filter == ProjectFilter::Only(category))
        .map(|tab| tab.label)
}

const CORPORATE_IMG: &str = "/assets/projects/corporate.jpg";
const DATACENTER_IMG: &str = "/assets/projects/datacenter.jpg";
const HOSPITAL_IMG: &str = "/assets/projects/hospital.jpg";

const CAMERAS: Text = Text::new("Cameras", "كاميرات");
const ACCESS_POINTS: Text = Text::new("Access Points", "نقاط تحكم");
const UPTIME: Text = Text::new("Uptime", "الموثوقية");

/// Tabs above the projects section on the landing page.
pub fn teaser_tabs() -> Vec<FilterTab> {
    vec![
        FilterTab { filter: ProjectFilter::All, label: Text::new("All Projects", "جميع المشاريع") },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Government),
            label: Text::new("Government", "حكومي"),
        },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Corporate),
            label: Text::new("Corporate", "الشركات"),
        },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Healthcare),
            label: Text::new("Healthcare", "الرعاية الصحية"),
        },
    ]
}

pub fn teaser_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: Text::new("Government Ministry Complex", "المقر الحكومي المركزي"),
            location: Text::new("Riyadh, Saudi Arabia", "الرياض، المملكة العربية السعودية"),
            image: CORPORATE_IMG,
            category: ProjectCategory::Government,
            description: Text::new(
                "Integrated security system with access control and surveillance",
                "نظام أمني متكامل يشمل التحكم بالدخول والمراقبة",
            ),
            technologies: vec![],
            stats: vec![
                Stat { value: "50+", label: CAMERAS },
                Stat { value: "200+", label: ACCESS_POINTS },
            ],
        },
        Project {
            id: 2,
            title: Text::new("National Data Center", "مركز البيانات الوطني"),
            location: Text::new("Jeddah, Saudi Arabia", "جدة، المملكة العربية السعودية"),
            image: DATACENTER_IMG,
            category: ProjectCategory::Corporate,
            description: Text::new(
                "Advanced protection for critical infrastructure",
                "حماية متقدمة للبنية التحتية الحيوية",
            ),
            technologies: vec![],
            stats: vec![
                Stat { value: "24/7", label: Text::new("Monitoring", "مراقبة") },
                Stat { value: "99.9%", label: UPTIME },
            ],
        },
        Project {
            id: 3,
            title: Text::new("Specialized Hospital", "المستشفى التخصصي"),
            location: Text::new("Dammam, Saudi Arabia", "الدمام، المملكة العربية السعودية"),
            image: HOSPITAL_IMG,
            category: ProjectCategory::Healthcare,
            description: Text::new(
                "Comprehensive security for medical facilities",
                "أمان شامل للمرافق الطبية",
            ),
            technologies: vec![],
            stats: vec![
                Stat { value: "100+", label: CAMERAS },
                Stat { value: "50+", label: Text::new("Points", "نقاط") },
            ],
        },
    ]
}

/// Filter row on the portfolio page.
pub fn portfolio_tabs() -> Vec<FilterTab> {
    vec![
        FilterTab { filter: ProjectFilter::All, label: Text::new("All Projects", "جميع المشاريع") },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Government),
            label: Text::new("Government", "حكومي"),
        },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Corporate),
            label: Text::new("Corporate", "شركات"),
        },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Healthcare),
            label: Text::new("Healthcare", "رعاية صحية"),
        },
        FilterTab {
            filter: ProjectFilter::Only(ProjectCategory::Education),
            label: Text::new("Education", "تعليم"),
        },
    ]
}

pub fn portfolio_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: Text::new("Government Ministry Complex", "مجمع الوزارات الحكومية"),
            location: Text::new("Riyadh, Saudi Arabia", "الرياض، السعودية"),
            image: CORPORATE_IMG,
            category: ProjectCategory::Government,
            description: Text::new(
                "Integrated security system including CCTV surveillance, access control, and metal detection",
                "نظام أمني متكامل يشمل كاميرات المراقبة والتحكم بالدخول وأجهزة الكشف عن المعادن",
            ),
            technologies: vec!["CCTV", "Access Control", "Metal Detection"],
            stats: vec![
                Stat { value: "200+", label: CAMERAS },
                Stat { value: "500+", label: ACCESS_POINTS },
                Stat { value: "99.9%", label: UPTIME },
            ],
        },
        Project {
            id: 2,
            title: Text::new("National Data Center", "مركز البيانات الوطني"),
            location: Text::new("Jeddah, Saudi Arabia", "جدة، السعودية"),
            image: DATACENTER_IMG,
            category: ProjectCategory::Corporate,
            description: Text::new(
                "Advanced protection for critical infrastructure with 24/7 monitoring",
                "حماية متقدمة للبنية التحتية الحيوية مع مراقبة على مدار الساعة",
            ),
            technologies: vec!["Biometric Access", "CCTV", "Perimeter Security"],
            stats: vec![
                Stat { value: "150+", label: CAMERAS },
                Stat { value: "200+", label: ACCESS_POINTS },
                Stat { value: "99.99%", label: UPTIME },
            ],
        },
        Project {
            id: 3,
            title: Text::new("Specialized Hospital", "المستشفى التخصصي"),
            location: Text::new("Dammam, Saudi Arabia", "الدمام، السعودية"),
            image: HOSPITAL_IMG,
            category: ProjectCategory::Healthcare,
            description: Text::new(
                "Comprehensive security for medical facilities with sensitive area access control",
                "أمان شامل للمرافق الطبية مع التحكم في الوصول للمناطق الحساسة",
            ),
            technologies: vec!["CCTV", "Access Control", "X-Ray Screening"],
            stats: vec![
                Stat { value: "100+", label: CAMERAS },
                Stat { value: "150+", label: ACCESS_POINTS },
                Stat { value: "99.9%", label: UPTIME },
            ],
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: Text,
    pub description: Text,
}

pub const SERVICES: [Service; 6] = [
    Service {
        id: "cctv",
        icon: "/assets/icons/camera.svg",
        title: Text::new("CCTV Surveillance", "أنظمة المراقبة بالكاميرات"),
        description: Text::new(
            "High-definition camera networks with centralized monitoring and video analytics.",
            "شبكات كاميرات عالية الدقة مع مراقبة مركزية وتحليلات فيديو ذكية.",
        ),
    },
    Service {
        id: "access-control",
        icon: "/assets/icons/key.svg",
        title: Text::new("Access Control", "التحكم بالدخول"),
        description: Text::new(
            "Card, PIN and biometric entry for every door, gate and turnstile.",
            "دخول بالبطاقات والرموز والبصمة لكل باب وبوابة وحاجز.",
        ),
    },
    Service {
        id: "perimeter",
        icon: "/assets/icons/fence.svg",
        title: Text::new("Perimeter Security", "حماية المحيط"),
        description: Text::new(
            "Intrusion detection, barriers and bollards for the outer line of defence.",
            "أنظمة كشف التسلل والحواجز والأعمدة لخط الدفاع الخارجي.",
        ),
    },
    Service {
        id: "screening",
        icon: "/assets/icons/scan.svg",
        title: Text::new("X-Ray & Metal Detection", "الفحص بالأشعة وكشف المعادن"),
        description: Text::new(
            "Baggage scanners and walk-through detectors for controlled entrances.",
            "أجهزة فحص الأمتعة وبوابات كشف المعادن للمداخل المراقبة.",
        ),
    },
    Service {
        id: "control-room",
        icon: "/assets/icons/monitor.svg",
        title: Text::new("Control Rooms", "غرف التحكم"),
        description: Text::new(
            "Design and integration of 24/7 security operations centres.",
            "تصميم وتكامل مراكز العمليات الأمنية على مدار الساعة.",
        ),
    },
    Service {
        id: "maintenance",
        icon: "/assets/icons/wrench.svg",
        title: Text::new("Maintenance & Support", "الصيانة والدعم"),
        description: Text::new(
            "Preventive maintenance contracts with round-the-clock emergency response.",
            "عقود صيانة وقائية مع استجابة طارئة على مدار الساعة.",
        ),
    },
];

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keeps_catalog_order() {
        let projects = portfolio_projects();
        let ids: Vec<u32> = filter_projects(&projects, ProjectFilter::All)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn category_filter_selects_matching_projects() {
        let projects = teaser_projects();
        let healthcare = filter_projects(&projects, ProjectFilter::Only(ProjectCategory::Healthcare));
        assert_eq!(healthcare.len(), 1);
        assert_eq!(healthcare[0].title.en, "Specialized Hospital");
    }

    #[test]
    fn education_has_no_projects_yet() {
        let projects = teaser_projects();
        assert!(filter_projects(&projects, ProjectFilter::Only(ProjectCategory::Education)).is_empty());
    }

    #[test]
    fn badge_on_portfolio_reuses_filter_label() {
        let tabs = portfolio_tabs();
        let label = tab_label(&tabs, ProjectCategory::Healthcare).unwrap();
        assert_eq!(label.get(Language::Ar), "رعاية صحية");
        assert_eq!(tab_label(&teaser_tabs(), ProjectCategory::Education), None);
    }

    #[test]
    fn service_ids_resolve() {
        assert_eq!(service_by_id("cctv").map(|s| s.title.en), Some("CCTV Surveillance"));
        assert!(service_by_id("drones").is_none());
    }

    #[test]
    fn every_project_has_a_tab_on_its_page() {
        let tabs = portfolio_tabs();
        for project in portfolio_projects() {
            assert!(tab_label(&tabs, project.category).is_some());
        }
        let tabs = teaser_tabs();
        for project in teaser_projects() {
            assert!(tab_label(&tabs, project.category).is_some());
        }
    }
}
