// src/insights/roadmap.rs
//! Static career roadmaps and the skill → role map used by the skills filter.

use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub step: &'static str,
    pub description: &'static str,
    pub resources: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roadmap {
    pub role: &'static str,
    pub skills: &'static [&'static str],
    pub steps: &'static [Step],
}

const fn st(step: &'static str, description: &'static str, resources: &'static str) -> Step {
    Step { step, description, resources }
}

pub static ROADMAPS: [Roadmap; 10] = [
    Roadmap {
        role: "Data Analyst",
        skills: &["Excel", "SQL", "Python", "Tableau", "Power BI", "Statistics"],
        steps: &[
            st("Master Excel", "Learn data manipulation, pivot tables, and VLOOKUP.", "Excel Easy, Coursera Excel Basics, YouTube: ExcelIsFun"),
            st("Learn SQL", "Write queries, joins, and aggregations.", "Mode Analytics SQL Tutorial, Khan Academy SQL, W3Schools SQL"),
            st("Learn Python", "Use pandas, numpy, and matplotlib.", "Automate the Boring Stuff, DataCamp Python, Kaggle Python Course"),
            st("Learn Tableau", "Create interactive dashboards.", "Tableau Public, Udemy Tableau Course, YouTube: Tableau Tutorials"),
            st("Learn Power BI", "Build reports with DAX.", "Microsoft Learn Power BI, Coursera Power BI, YouTube: Guy in a Cube"),
            st("Learn Statistics", "Understand regression and hypothesis testing.", "StatQuest YouTube, Khan Academy Statistics, Coursera Statistics"),
        ],
    },
    Roadmap {
        role: "Data Scientist",
        skills: &["Python", "SQL", "Machine Learning", "Statistics", "R", "Data Visualization"],
        steps: &[
            st("Learn Python", "Master pandas, sklearn, and matplotlib.", "DataCamp Python, Kaggle Python Course, YouTube: Corey Schafer"),
            st("Learn SQL", "Query datasets with joins.", "SQLZoo, Mode Analytics, W3Schools SQL"),
            st("Learn Data Analytics", "Perform EDA and data cleaning.", "Coursera Data Analysis, Kaggle Tutorials, YouTube: StatQuest"),
            st("Learn Machine Learning", "Study regression, classification.", "Andrew Ng Coursera ML, Fast.ai, Kaggle ML Courses"),
            st("Learn R", "Use R for statistical modeling.", "R for Data Science, DataCamp R, YouTube: MarinStatsLectures"),
            st("Explore Deep Learning", "Learn neural networks with TensorFlow.", "DeepLearning.AI Coursera, YouTube: Sentdex, Fast.ai"),
        ],
    },
    Roadmap {
        role: "Machine Learning Engineer",
        skills: &["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Cloud Platforms"],
        steps: &[
            st("Learn Python", "Master ML libraries like sklearn.", "Automate the Boring Stuff, DataCamp Python, Kaggle Python Course"),
            st("Learn Machine Learning", "Understand SVM, random forests.", "Andrew Ng Coursera ML, Fast.ai, Kaggle ML Courses"),
            st("Learn Deep Learning", "Build neural networks.", "DeepLearning.AI Coursera, YouTube: Sentdex, Fast.ai Deep Learning"),
            st("Master TensorFlow", "Develop production-ready models.", "TensorFlow Tutorials, Coursera TensorFlow, YouTube: TensorFlow"),
            st("Master PyTorch", "Use PyTorch for research.", "PyTorch Tutorials, Udemy PyTorch, YouTube: Python Engineer"),
            st("Learn Cloud Platforms", "Deploy models on AWS.", "AWS Machine Learning, Google Cloud ML, Microsoft Learn Azure"),
        ],
    },
    Roadmap {
        role: "Web Developer",
        skills: &["HTML", "CSS", "JavaScript", "React", "Node.js", "MongoDB"],
        steps: &[
            st("Learn HTML", "Build webpage structures.", "W3Schools HTML, FreeCodeCamp, YouTube: Traversy Media"),
            st("Learn CSS", "Style with flexbox, animations.", "CSS-Tricks, FreeCodeCamp CSS, YouTube: Kevin Powell"),
            st("Learn JavaScript", "Add interactivity with ES6.", "JavaScript.info, Eloquent JavaScript, YouTube: The Net Ninja"),
            st("Learn React", "Build dynamic UI components.", "React Docs, Scrimba React, YouTube: Traversy Media"),
            st("Learn Node.js", "Create backend APIs.", "Node.js Docs, Udemy Node.js, YouTube: Academind"),
            st("Learn MongoDB", "Use NoSQL databases.", "MongoDB University, YouTube: Tech With Tim, Coursera MongoDB"),
        ],
    },
    Roadmap {
        role: "Mobile App Developer",
        skills: &["Flutter", "React Native", "Java", "Kotlin", "Swift", "REST APIs"],
        steps: &[
            st("Learn Flutter", "Build cross-platform apps.", "Flutter Docs, Udemy Flutter, YouTube: The Net Ninja"),
            st("Learn React Native", "Develop with JavaScript.", "React Native Docs, Coursera React Native, YouTube: Programming with Mosh"),
            st("Learn Java", "Understand Android fundamentals.", "Head First Java, Udemy Java, YouTube: ProgrammingKnowledge"),
            st("Learn Kotlin", "Use Kotlin for Android.", "Kotlin Docs, Udemy Kotlin, YouTube: Philipp Lackner"),
            st("Learn Swift", "Develop iOS apps.", "Apple Swift Docs, Hacking with Swift, YouTube: Sean Allen"),
            st("Learn REST APIs", "Connect apps to backends.", "Postman Tutorial, YouTube: Traversy Media, Coursera API Design"),
        ],
    },
    Roadmap {
        role: "Software Engineer",
        skills: &["Python", "Java", "C++", "Data Structures", "Algorithms", "Git"],
        steps: &[
            st("Learn Python", "Master general-purpose coding.", "Automate the Boring Stuff, DataCamp Python, YouTube: Corey Schafer"),
            st("Learn Java", "Understand OOP and enterprise apps.", "Head First Java, Udemy Java, YouTube: ProgrammingKnowledge"),
            st("Learn C++", "Use for performance-critical apps.", "LearnCpp.com, Udemy C++, YouTube: The Cherno"),
            st("Learn Data Structures", "Master arrays, trees.", "GeeksforGeeks DSA, Coursera DSA, YouTube: Abdul Bari"),
            st("Learn Algorithms", "Study sorting, dynamic programming.", "CLRS Book, LeetCode, YouTube: NeetCode"),
            st("Learn Git", "Use version control.", "Git Docs, YouTube: Traversy Media, Coursera Git"),
        ],
    },
    Roadmap {
        role: "DevOps Engineer",
        skills: &["Linux", "Docker", "Kubernetes", "AWS", "CI/CD", "Terraform"],
        steps: &[
            st("Learn Linux", "Master system administration.", "Linux Journey, Udemy Linux, YouTube: LinuxHint"),
            st("Learn Docker", "Containerize applications.", "Docker Docs, YouTube: TechWorld with Nana, Coursera Docker"),
            st("Learn Kubernetes", "Orchestrate containers.", "Kubernetes Docs, Udemy Kubernetes, YouTube: KubeSimplified"),
            st("Learn AWS", "Use cloud infrastructure.", "AWS Free Tier, ACloudGuru, YouTube: AWS Training"),
            st("Learn CI/CD", "Automate with Jenkins.", "Jenkins Docs, YouTube: TechWorld with Nana, Coursera CI/CD"),
            st("Learn Terraform", "Manage infrastructure.", "Terraform Docs, Udemy Terraform, YouTube: HashiCorp"),
        ],
    },
    Roadmap {
        role: "Full Stack Developer",
        skills: &["HTML", "CSS", "JavaScript", "React", "Node.js", "SQL"],
        steps: &[
            st("Learn HTML", "Build webpage structures.", "W3Schools HTML, FreeCodeCamp, YouTube: Traversy Media"),
            st("Learn CSS", "Style with responsive design.", "CSS-Tricks, FreeCodeCamp CSS, YouTube: Kevin Powell"),
            st("Learn JavaScript", "Add client-side logic.", "JavaScript.info, Eloquent JavaScript, YouTube: The Net Ninja"),
            st("Learn React", "Develop dynamic frontends.", "React Docs, Scrimba React, YouTube: Traversy Media"),
            st("Learn Node.js", "Build scalable APIs.", "Node.js Docs, Udemy Node.js, YouTube: Academind"),
            st("Learn SQL", "Manage databases.", "SQLZoo, Mode Analytics, YouTube: Tech With Tim"),
        ],
    },
    Roadmap {
        role: "Cloud Engineer",
        skills: &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform"],
        steps: &[
            st("Learn AWS", "Master EC2, S3, Lambda.", "AWS Free Tier, ACloudGuru, YouTube: AWS Training"),
            st("Learn Azure", "Use Azure services.", "Microsoft Learn Azure, Udemy Azure, YouTube: Adam Marczak"),
            st("Learn GCP", "Explore Google Cloud.", "Google Cloud Skills Boost, Coursera GCP, YouTube: Google Cloud Tech"),
            st("Learn Docker", "Containerize apps.", "Docker Docs, YouTube: TechWorld with Nana, Coursera Docker"),
            st("Learn Kubernetes", "Orchestrate containers.", "Kubernetes Docs, Udemy Kubernetes, YouTube: KubeSimplified"),
            st("Learn Terraform", "Automate infrastructure.", "Terraform Docs, Udemy Terraform, YouTube: HashiCorp"),
        ],
    },
    Roadmap {
        role: "Python Developer",
        skills: &["Python", "Git", "Django", "Flask", "SQL"],
        steps: &[
            st("Learn Python", "Master Python programming.", "Automate the Boring Stuff, DataCamp Python, YouTube: Corey Schafer"),
            st("Learn Git", "Use version control.", "Git Docs, YouTube: Traversy Media, Coursera Git"),
            st("Learn Django", "Build web apps with Django.", "Django Docs, Udemy Django, YouTube: The Net Ninja"),
            st("Learn Flask", "Create lightweight web apps.", "Flask Docs, Udemy Flask, YouTube: Tech With Tim"),
            st("Learn SQL", "Manage databases.", "SQLZoo, Mode Analytics, YouTube: Tech With Tim"),
        ],
    },
];

/// Skill → related roles, role names in display form ("Data Analyst").
pub static SKILL_TO_ROLES: &[(&str, &[&str])] = &[
    ("Python", &["Data Analyst", "Data Scientist", "Machine Learning Engineer", "Software Engineer", "Python Developer"]),
    ("Java", &["Mobile App Developer", "Software Engineer"]),
    ("SQL", &["Data Analyst", "Data Scientist", "Full Stack Developer", "Python Developer"]),
    ("Excel", &["Data Analyst"]),
    ("Tableau", &["Data Analyst"]),
    ("Power BI", &["Data Analyst"]),
    ("Machine Learning", &["Data Scientist", "Machine Learning Engineer"]),
    ("Deep Learning", &["Data Scientist", "Machine Learning Engineer"]),
    ("HTML", &["Web Developer", "Full Stack Developer"]),
    ("CSS", &["Web Developer", "Full Stack Developer"]),
    ("JavaScript", &["Web Developer", "Full Stack Developer"]),
    ("React", &["Web Developer", "Full Stack Developer"]),
    ("Node.js", &["Web Developer", "Full Stack Developer"]),
    ("MongoDB", &["Web Developer"]),
    ("Flutter", &["Mobile App Developer"]),
    ("React Native", &["Mobile App Developer"]),
    ("Kotlin", &["Mobile App Developer"]),
    ("Swift", &["Mobile App Developer"]),
    ("C++", &["Software Engineer"]),
    ("Data Structures", &["Software Engineer"]),
    ("Git", &["Software Engineer", "Python Developer"]),
    ("Linux", &["DevOps Engineer"]),
    ("Docker", &["DevOps Engineer", "Cloud Engineer"]),
    ("Kubernetes", &["DevOps Engineer", "Cloud Engineer"]),
    ("AWS", &["DevOps Engineer", "Cloud Engineer"]),
    ("Azure", &["Cloud Engineer"]),
    ("Statistics", &["Data Analyst", "Data Scientist"]),
    ("R", &["Data Scientist", "Data Analyst"]),
    ("Cloud Platforms", &["Machine Learning Engineer"]),
];

/// Related roles for `skill`, matched case-insensitively ("sql" finds "SQL").
pub fn roles_for_skill(skill: &str) -> &'static [&'static str] {
    let skill = skill.trim();
    SKILL_TO_ROLES
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(skill))
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

pub fn find(role: &str) -> Option<&'static Roadmap> {
    ROADMAPS.iter().find(|r| r.role.eq_ignore_ascii_case(role.trim()))
}

impl Roadmap {
    /// Plain-text export.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "CareerVue Career Roadmap for {}", self.role);
        let _ = writeln!(out);
        let _ = writeln!(out, "Skills Required: {}", self.skills.join(", "));
        let _ = writeln!(out);
        let _ = writeln!(out, "Roadmap to Prepare:");
        for (i, s) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}: {} (Resources: {})", i + 1, s.step, s.description, s.resources);
        }
        out
    }

    pub fn file_name(&self) -> String {
        format!("{}_Roadmap.txt", self.role.replace(' ', "_"))
    }
}
