//! Built-in site content: the six-phase AI learning path, navigation
//! sections, hero copy and project cards.
//!
//! Append only. Identifiers of existing items are persisted by users.

use super::{ItemSpec, PhaseSpec, ProjectCategory, ProjectSpec, ProjectStatus, ResourceLink};

use super::Difficulty::*;

pub const BRAND_NAME: &str = "Pavan Kumar Korlakunta";
pub const BRAND_INITIALS: &str = "PK";
pub const TYPING_TEXT: &str = "Hello, I'm";
pub const HERO_ROLES: &[&str] = &[
    "AI Expert",
    "ML Engineer",
    "Data Scientist",
    "Cloud Architect",
    "AI Educator",
];
pub const HERO_DESCRIPTION: &str = "Transforming complex problems into intelligent solutions \
across the entire AI spectrum. From classical ML to cutting-edge AI Agents, I architect and \
deploy production-ready systems while teaching others to master AI.";

/// Hero counters: final label and caption.
pub const HERO_STATS: &[(&str, &str)] = &[
    ("3+", "Years Experience"),
    ("50+", "Learning Resources"),
    ("100%", "Free Content"),
];

/// A navigable page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec { id: "home", label: "Home", icon: "fas fa-home" },
    SectionSpec { id: "learning", label: "AI Learning", icon: "fas fa-graduation-cap" },
    SectionSpec { id: "about", label: "About", icon: "fas fa-user" },
    SectionSpec { id: "github", label: "GitHub", icon: "fab fa-github" },
    SectionSpec { id: "linkedin", label: "LinkedIn", icon: "fab fa-linkedin" },
    SectionSpec { id: "education", label: "Education", icon: "fas fa-university" },
    SectionSpec { id: "projects", label: "Projects", icon: "fas fa-code" },
    SectionSpec { id: "contact", label: "Contact", icon: "fas fa-envelope" },
];

pub fn section(id: &str) -> Option<&'static SectionSpec> {
    SECTIONS.iter().find(|s| s.id == id)
}

const fn link(title: &'static str, url: &'static str, icon: &'static str) -> ResourceLink {
    ResourceLink { title, url, icon }
}

pub const PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        id: 1,
        title: "Programming Foundation",
        description: "Master the essential programming languages for AI",
        icon: "fas fa-code",
        color: "#4CAF50",
        items: &[
            ItemSpec {
                title: "Python Programming",
                description: "Core language for AI/ML development",
                difficulty: Beginner,
                estimated_time: "4-6 weeks",
                links: &[
                    link("Official Tutorial", "https://python.org/about/gettingstarted/", "fas fa-external-link-alt"),
                    link("Interactive Course", "https://www.codecademy.com/learn/learn-python-3", "fas fa-code"),
                    link("Python for Everybody", "https://www.coursera.org/specializations/python", "fas fa-graduation-cap"),
                ],
            },
            ItemSpec {
                title: "SQL & Databases",
                description: "Essential for data manipulation and storage",
                difficulty: Beginner,
                estimated_time: "2-3 weeks",
                links: &[
                    link("SQL Tutorial", "https://www.w3schools.com/sql/", "fas fa-database"),
                    link("Interactive SQL", "https://sqlbolt.com/", "fas fa-play"),
                    link("PostgreSQL Tutorial", "https://www.postgresqltutorial.com/", "fas fa-elephant"),
                ],
            },
            ItemSpec {
                title: "R Programming",
                description: "Statistical computing and data analysis",
                difficulty: Intermediate,
                estimated_time: "3-4 weeks",
                links: &[
                    link("R Official", "https://www.r-project.org/about.html", "fas fa-chart-bar"),
                    link("DataCamp R", "https://www.datacamp.com/courses/free-introduction-to-r", "fas fa-graduation-cap"),
                ],
            },
        ],
    },
    PhaseSpec {
        id: 2,
        title: "Data Science Fundamentals",
        description: "Statistics, data analysis, and visualization",
        icon: "fas fa-chart-line",
        color: "#FF9800",
        items: &[
            ItemSpec {
                title: "Statistics & Mathematics",
                description: "Foundation for understanding ML algorithms",
                difficulty: Intermediate,
                estimated_time: "6-8 weeks",
                links: &[
                    link("Khan Academy Stats", "https://www.khanacademy.org/math/statistics-probability", "fas fa-calculator"),
                    link("Stanford Statistics", "https://www.coursera.org/learn/stanford-statistics", "fas fa-university"),
                    link("Think Stats", "https://greenteapress.com/thinkstats2/", "fas fa-book"),
                ],
            },
            ItemSpec {
                title: "Pandas & NumPy",
                description: "Data manipulation and numerical computing",
                difficulty: Beginner,
                estimated_time: "3-4 weeks",
                links: &[
                    link("Pandas Documentation", "https://pandas.pydata.org/docs/getting_started/index.html", "fas fa-table"),
                    link("NumPy Learn", "https://numpy.org/learn/", "fas fa-square-root-alt"),
                    link("10 Minutes to Pandas", "https://pandas.pydata.org/docs/user_guide/10min.html", "fas fa-clock"),
                ],
            },
            ItemSpec {
                title: "Data Visualization",
                description: "Matplotlib, Seaborn, Plotly for insights",
                difficulty: Beginner,
                estimated_time: "2-3 weeks",
                links: &[
                    link("Matplotlib Tutorials", "https://matplotlib.org/stable/tutorials/index.html", "fas fa-chart-line"),
                    link("Seaborn Tutorial", "https://seaborn.pydata.org/tutorial.html", "fas fa-palette"),
                    link("Plotly Python", "https://plotly.com/python/", "fas fa-chart-bar"),
                ],
            },
        ],
    },
    PhaseSpec {
        id: 3,
        title: "Machine Learning",
        description: "Classical ML algorithms and techniques",
        icon: "fas fa-brain",
        color: "#2196F3",
        items: &[
            ItemSpec {
                title: "Scikit-learn Mastery",
                description: "Complete ML library for Python",
                difficulty: Intermediate,
                estimated_time: "8-10 weeks",
                links: &[
                    link("Scikit-learn Guide", "https://scikit-learn.org/stable/getting_started.html", "fas fa-cogs"),
                    link("Andrew Ng ML Course", "https://www.coursera.org/learn/machine-learning", "fas fa-brain"),
                    link("Hands-On ML Book", "https://www.oreilly.com/library/view/hands-on-machine-learning/9781492032632/", "fas fa-book"),
                ],
            },
            ItemSpec {
                title: "Ensemble Methods",
                description: "XGBoost, Random Forest, LightGBM",
                difficulty: Advanced,
                estimated_time: "4-5 weeks",
                links: &[
                    link("XGBoost Documentation", "https://xgboost.readthedocs.io/en/stable/", "fas fa-tree"),
                    link("LightGBM Guide", "https://lightgbm.readthedocs.io/en/latest/", "fas fa-bolt"),
                    link("Ensemble Guide", "https://machinelearningmastery.com/ensemble-methods-for-deep-learning-neural-networks/", "fas fa-layer-group"),
                ],
            },
        ],
    },
    PhaseSpec {
        id: 4,
        title: "Deep Learning",
        description: "Neural networks and advanced architectures",
        icon: "fas fa-network-wired",
        color: "#9C27B0",
        items: &[
            ItemSpec {
                title: "TensorFlow & Keras",
                description: "Google's deep learning framework",
                difficulty: Advanced,
                estimated_time: "10-12 weeks",
                links: &[
                    link("TensorFlow Learn", "https://www.tensorflow.org/learn", "fas fa-brain"),
                    link("DeepLearning.AI", "https://www.deeplearning.ai/courses/", "fas fa-graduation-cap"),
                    link("TensorFlow Developer Certificate", "https://www.tensorflow.org/certificate", "fas fa-certificate"),
                ],
            },
            ItemSpec {
                title: "PyTorch Mastery",
                description: "Facebook's research-focused framework",
                difficulty: Advanced,
                estimated_time: "8-10 weeks",
                links: &[
                    link("PyTorch Tutorials", "https://pytorch.org/tutorials/", "fas fa-fire"),
                    link("Fast.ai Course", "https://www.fast.ai/", "fas fa-rocket"),
                    link("PyTorch Lightning", "https://www.pytorchlightning.ai/", "fas fa-bolt"),
                ],
            },
        ],
    },
    PhaseSpec {
        id: 5,
        title: "Specialized AI Domains",
        description: "Computer Vision, NLP, and AI Agents",
        icon: "fas fa-eye",
        color: "#FF5722",
        items: &[
            ItemSpec {
                title: "Computer Vision",
                description: "OpenCV, YOLO, image processing",
                difficulty: Advanced,
                estimated_time: "8-10 weeks",
                links: &[
                    link("OpenCV Courses", "https://opencv.org/courses/", "fas fa-eye"),
                    link("CNN Specialization", "https://www.coursera.org/learn/convolutional-neural-networks", "fas fa-camera"),
                    link("Computer Vision Nanodegree", "https://www.udacity.com/course/computer-vision-nanodegree--nd891", "fas fa-graduation-cap"),
                ],
            },
            ItemSpec {
                title: "Natural Language Processing",
                description: "NLTK, spaCy, Transformers, LLMs",
                difficulty: Advanced,
                estimated_time: "10-12 weeks",
                links: &[
                    link("HuggingFace Course", "https://huggingface.co/course/chapter1/1", "fas fa-comments"),
                    link("NLTK Book", "https://www.nltk.org/book/", "fas fa-book"),
                    link("NLP Specialization", "https://www.coursera.org/specializations/natural-language-processing", "fas fa-language"),
                ],
            },
            ItemSpec {
                title: "AI Agents & LangChain",
                description: "Building intelligent autonomous systems",
                difficulty: Expert,
                estimated_time: "6-8 weeks",
                links: &[
                    link("LangChain Documentation", "https://python.langchain.com/docs/get_started/introduction", "fas fa-robot"),
                    link("LangChain Course", "https://www.deeplearning.ai/short-courses/langchain-for-llm-application-development/", "fas fa-link"),
                    link("AutoGPT Guide", "https://github.com/Significant-Gravitas/Auto-GPT", "fab fa-github"),
                ],
            },
        ],
    },
    PhaseSpec {
        id: 6,
        title: "Cloud AI & Deployment",
        description: "AWS, Azure, GCP, and MLOps",
        icon: "fas fa-cloud",
        color: "#607D8B",
        items: &[
            ItemSpec {
                title: "AWS AI Services",
                description: "SageMaker, Lambda, EC2 for ML",
                difficulty: Advanced,
                estimated_time: "6-8 weeks",
                links: &[
                    link("AWS ML Training", "https://aws.amazon.com/training/learn-about/machine-learning/", "fab fa-aws"),
                    link("AWS ML Specialty", "https://aws.amazon.com/certification/certified-machine-learning-specialty/", "fas fa-certificate"),
                    link("SageMaker Examples", "https://github.com/aws/amazon-sagemaker-examples", "fab fa-github"),
                ],
            },
            ItemSpec {
                title: "Azure AI Platform",
                description: "Azure ML Studio, Cognitive Services",
                difficulty: Advanced,
                estimated_time: "6-8 weeks",
                links: &[
                    link("Azure ML Documentation", "https://docs.microsoft.com/en-us/azure/machine-learning/", "fab fa-microsoft"),
                    link("Azure AI Fundamentals", "https://docs.microsoft.com/en-us/learn/certifications/azure-ai-fundamentals/", "fas fa-certificate"),
                ],
            },
            ItemSpec {
                title: "Google Cloud AI",
                description: "Vertex AI, AutoML, AI Platform",
                difficulty: Advanced,
                estimated_time: "6-8 weeks",
                links: &[
                    link("GCP AI Documentation", "https://cloud.google.com/ai-platform/docs", "fab fa-google"),
                    link("ML Engineer Certification", "https://cloud.google.com/certification/machine-learning-engineer", "fas fa-certificate"),
                ],
            },
            ItemSpec {
                title: "Terraform & Infrastructure",
                description: "Infrastructure as Code for ML",
                difficulty: Advanced,
                estimated_time: "4-5 weeks",
                links: &[
                    link("Terraform Learn", "https://learn.hashicorp.com/terraform", "fas fa-cubes"),
                    link("Terraform AWS Provider", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs", "fas fa-cloud"),
                ],
            },
            ItemSpec {
                title: "MLOps & Production",
                description: "Docker, Kubernetes, CI/CD for ML",
                difficulty: Expert,
                estimated_time: "8-10 weeks",
                links: &[
                    link("MLOps Community", "https://mlops.org/", "fas fa-cogs"),
                    link("MLOps Specialization", "https://www.coursera.org/learn/machine-learning-engineering-for-production-mlops", "fas fa-industry"),
                    link("Kubeflow", "https://www.kubeflow.org/", "fas fa-dharmachakra"),
                ],
            },
        ],
    },
];

pub const PROJECTS: &[ProjectSpec] = &[
    ProjectSpec {
        title: "Intelligent Document Processing System",
        description: "End-to-end document processing using OCR, NLP, and ML classification with 94% accuracy.",
        technologies: &["Python", "Tesseract OCR", "spaCy", "Scikit-learn"],
        metrics: &[("accuracy", "94%"), ("time reduction", "75%")],
        category: ProjectCategory::Nlp,
        status: ProjectStatus::Production,
    },
    ProjectSpec {
        title: "Predictive Analytics Dashboard",
        description: "ML pipeline for sales forecasting and customer behavior prediction with automated model selection.",
        technologies: &["Python", "XGBoost", "Flask", "PostgreSQL"],
        metrics: &[("accuracy", "92%"), ("predictions", "50K+ daily")],
        category: ProjectCategory::Ml,
        status: ProjectStatus::Production,
    },
    ProjectSpec {
        title: "Smart Image Classification System",
        description: "Deep learning system for automated image classification and quality control using CNN architectures.",
        technologies: &["TensorFlow", "OpenCV", "CNN", "Flask"],
        metrics: &[("accuracy", "96%"), ("throughput", "15 FPS")],
        category: ProjectCategory::Cv,
        status: ProjectStatus::Production,
    },
    ProjectSpec {
        title: "AI Learning Platform",
        description: "Comprehensive learning platform with structured AI curriculum and progress tracking.",
        technologies: &["JavaScript", "HTML5", "CSS3", "Local Storage"],
        metrics: &[("resources", "50+"), ("phases", "6")],
        category: ProjectCategory::Web,
        status: ProjectStatus::Active,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ItemId};

    #[test]
    fn builtin_item_count() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.phases().len(), 6);
        assert_eq!(catalog.total_items(), 18);
    }

    #[test]
    fn persisted_ids_stay_put() {
        // Renumbering would orphan users' saved progress.
        let catalog = Catalog::builtin();
        let python = catalog.item(&ItemId::from_raw("1-0")).unwrap();
        assert_eq!(python.title, "Python Programming");
        let mlops = catalog.item(&ItemId::from_raw("6-4")).unwrap();
        assert_eq!(mlops.title, "MLOps & Production");
    }

    #[test]
    fn section_lookup() {
        assert_eq!(section("learning").map(|s| s.label), Some("AI Learning"));
        assert!(section("blog").is_none());
        assert_eq!(SECTIONS[0].id, "home");
    }

    #[test]
    fn every_category_has_a_project() {
        for c in ProjectCategory::ALL {
            assert!(PROJECTS.iter().any(|p| p.category == c), "{}", c.as_str());
        }
    }
}
