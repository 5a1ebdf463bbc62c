//! Everything the page displays. Compiled in, never mutated.

use chrono::{DateTime, NaiveDate};

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub greeting: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Zheng Jiahuang",
    role: "Full-Stack Developer",
    greeting: "Hi, I'm",
    tagline: "I build polished digital experiences with modern web technology, with a focus on performance, accessibility and thoughtful design.",
    portrait: "/placeholder.svg?height=500&width=500",
};

pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "ZhengJiahuang_FullStack_Resume.pdf";

pub struct NavItem {
    pub label: &'static str,
    /// Element id to scroll to; `None` means the top of the page.
    pub target: Option<&'static str>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: None,
    },
    NavItem {
        label: "Skills",
        target: Some("skills"),
    },
    NavItem {
        label: "Experience",
        target: Some("experience"),
    },
    NavItem {
        label: "Projects",
        target: Some("projects"),
    },
    NavItem {
        label: "Contact",
        target: Some("contact"),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tooling",
            SkillCategory::Soft => "Soft skills",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
}

const fn skill(name: &'static str, level: u8, category: SkillCategory) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("React", 95, SkillCategory::Frontend),
    skill("Next.js", 90, SkillCategory::Frontend),
    skill("TypeScript", 85, SkillCategory::Frontend),
    skill("Tailwind CSS", 90, SkillCategory::Frontend),
    skill("Vue.js", 80, SkillCategory::Frontend),
    skill("Node.js", 85, SkillCategory::Backend),
    skill("Express", 80, SkillCategory::Backend),
    skill("MongoDB", 75, SkillCategory::Backend),
    skill("MySQL", 70, SkillCategory::Backend),
    skill("Python", 65, SkillCategory::Backend),
    skill("Git", 90, SkillCategory::Tools),
    skill("Docker", 70, SkillCategory::Tools),
    skill("AWS", 65, SkillCategory::Tools),
    skill("CI/CD", 75, SkillCategory::Tools),
    skill("Problem solving", 95, SkillCategory::Soft),
    skill("Teamwork", 90, SkillCategory::Soft),
    skill("Project management", 85, SkillCategory::Soft),
    skill("Communication", 80, SkillCategory::Soft),
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    /// Year and month the role started.
    pub start: (i32, u32),
    /// Year and month the role ended, `None` while ongoing.
    pub end: Option<(i32, u32)>,
}

impl Experience {
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end
            .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
    }

    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Senior Frontend Engineer",
        company: "Tech Innovation Co., Ltd.",
        location: "Shenzhen, Guangdong",
        period: "Jan 2022 - Present",
        highlights: &[
            "Led a five-person team building a next-generation SaaS platform with Next.js and TypeScript",
            "Rolled out a CI/CD pipeline that cut deployment time by 40%",
            "Designed a component library that raised development velocity by 30%",
            "Optimised application performance, improving load times by 25%",
        ],
        start: (2022, 1),
        end: None,
    },
    Experience {
        title: "Frontend Engineer",
        company: "Digital Solutions Technology",
        location: "Guangzhou, Guangdong",
        period: "Mar 2019 - Dec 2021",
        highlights: &[
            "Built responsive web applications with React and Redux",
            "Worked with UX designers on pixel-perfect interfaces",
            "Integrated RESTful APIs and GraphQL endpoints",
            "Mentored junior developers and ran code reviews",
        ],
        start: (2019, 3),
        end: Some((2021, 12)),
    },
    Experience {
        title: "Web Developer",
        company: "Creative Design Studio",
        location: "Shanghai",
        period: "Jun 2017 - Feb 2019",
        highlights: &[
            "Built interactive websites for clients across industries",
            "Delivered responsive designs with HTML5, CSS3 and JavaScript",
            "Worked with WordPress and custom PHP solutions",
            "Kept visual consistency together with the design team",
        ],
        start: (2017, 6),
        end: Some((2019, 2)),
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
    pub details: &'static str,
}

const WEB_STACK: &[&str] = &["React", "Next.js", "TypeScript", "Tailwind CSS"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "project-1",
        title: "Multi-purpose Unit Converter",
        description: "A toolbox of practical calculators for e-commerce",
        image: "/placeholder.svg?height=600&width=800",
        tags: WEB_STACK,
        github: Some("https://github.com/Hanyeweiyang/unit-converter.git"),
        demo: Some("https://zjh-unit-converter.vercel.app/"),
        details: "A collection of practical tools designed for e-commerce that makes everyday calculations and conversions easy. Built on a modern frontend stack with a friendly interface and multi-language support.",
    },
    Project {
        id: "project-2",
        title: "AI Prompt Engineering App",
        description: "A collaborative workspace with live updates",
        image: "/placeholder.svg?height=600&width=800",
        tags: WEB_STACK,
        github: Some("https://github.com/Hanyeweiyang/prompt-engineering"),
        demo: Some("https://zjh-prompt-engineering.vercel.app/"),
        details: "A Next.js platform for prompt engineering that helps developers create, test and deploy AI prompt applications efficiently.",
    },
    Project {
        id: "project-3",
        title: "Personal Portfolio Site",
        description: "A personal resume site presented like a product homepage",
        image: "/placeholder.svg?height=600&width=800",
        tags: WEB_STACK,
        github: Some("https://github.com/Hanyeweiyang/resume-website.git"),
        demo: Some("https://zjh-prompt-engineering.vercel.app/"),
        details: "Designed and developed with AI assistance, presented as a product homepage to help individuals and small companies promote themselves and their work.",
    },
];

pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "✉",
        label: "Email",
        value: "zheng.jiahuang@example.com",
    },
    ContactDetail {
        icon: "☏",
        label: "Phone",
        value: "+86 138 0000 0000",
    },
    ContactDetail {
        icon: "⌖",
        label: "Location",
        value: "Shenzhen, Guangdong",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub hover_class: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/zhengjiahuang",
        icon: "devicon-github-plain",
        hover_class: "hover:text-gray-900 dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-800",
    },
    SocialLink {
        label: "Gitee",
        href: "https://gitee.com/zhengjiahuang",
        icon: "extra-gitee",
        hover_class: "hover:text-red-600 hover:bg-red-50 dark:hover:bg-red-900/20",
    },
    SocialLink {
        label: "Douyin",
        href: "https://www.douyin.com/user/zhengjiahuang",
        icon: "extra-douyin",
        hover_class: "hover:text-black dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-800",
    },
    SocialLink {
        label: "Kuaishou",
        href: "https://www.kuaishou.com/profile/zhengjiahuang",
        icon: "extra-kuaishou",
        hover_class: "hover:text-orange-500 hover:bg-orange-50 dark:hover:bg-orange-900/20",
    },
    SocialLink {
        label: "Bilibili",
        href: "https://space.bilibili.com/zhengjiahuang",
        icon: "extra-bilibili",
        hover_class: "hover:text-pink-500 hover:bg-pink-50 dark:hover:bg-pink-900/20",
    },
    SocialLink {
        label: "Xiaohongshu",
        href: "https://www.xiaohongshu.com/user/profile/zhengjiahuang",
        icon: "extra-xiaohongshu",
        hover_class: "hover:text-red-500 hover:bg-red-50 dark:hover:bg-red-900/20",
    },
];

/// "January 2024" style label from an RFC 3339 timestamp such as `BUILD_TIME`.
pub fn updated_label(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(skills_in(category).count() > 0, "{category:?} is empty");
        }
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(project("project-2").map(|p| p.id), Some("project-2"));
        assert!(project("missing").is_none());
    }

    #[test]
    fn test_nav_targets_are_sections() {
        let sections = ["skills", "experience", "projects", "contact"];
        for item in NAV_ITEMS.iter().filter_map(|n| n.target) {
            assert!(sections.contains(&item), "unknown section {item}");
        }
    }

    #[test]
    fn test_experience_dates() {
        let current = EXPERIENCES.iter().filter(|e| e.is_current()).count();
        assert_eq!(current, 1);
        assert_eq!(
            EXPERIENCES[1].end_date(),
            NaiveDate::from_ymd_opt(2021, 12, 1)
        );
        for exp in EXPERIENCES {
            if let Some((year, month)) = exp.end {
                assert!((year, month) >= exp.start);
            }
        }
    }

    #[test]
    fn test_updated_label() {
        assert_eq!(
            updated_label("2024-01-15T08:30:00+00:00").as_deref(),
            Some("January 2024")
        );
        assert!(updated_label("yesterday").is_none());
    }
}
