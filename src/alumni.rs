//! Static alumni reference data: the alumni catalog, per-career-path type
//! weights, suggested next achievements and statistical blurbs.
//!
//! Every alumnus carries at least one achievement, and every career path used
//! by an alumnus has an entry in [`CAREER_PATH_WEIGHTS`]. Suggestions exist
//! for a subset of paths; the rest fall back to [`DEFAULT_CAREER_PATH`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::AchievementType::{Coding, Hackathon, Internship, Paper, Project, Symposium};
use crate::models::{round_tenth, AchievementType, Priority};

pub const DEFAULT_CAREER_PATH: &str = "Software Development";

#[derive(Debug)]
pub struct AlumniAchievement {
    pub achievement_type: AchievementType,
    pub name: &'static str,
    pub position: &'static str,
    pub level: &'static str,
}

#[derive(Debug)]
pub struct AlumniRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub graduation_year: u16,
    pub department: &'static str,
    pub current_role: &'static str,
    pub career_path: &'static str,
    pub achievements: &'static [AlumniAchievement],
    pub skills: &'static [&'static str],
    pub time_to_placement_months: u32,
    pub placement_package_lpa: u32,
    pub tips: &'static str,
}

pub struct CareerPathWeights {
    pub career_path: &'static str,
    pub weights: &'static [(AchievementType, f64)],
}

#[derive(Debug)]
pub struct Suggestion {
    pub achievement_type: AchievementType,
    pub name: &'static str,
    pub reason: &'static str,
    pub priority: Priority,
    /// Level used to key the statistical insight table; `None` means "National".
    pub level: Option<&'static str>,
}

pub struct SuggestionSet {
    pub career_path: &'static str,
    pub suggestions: &'static [Suggestion],
}

const fn ach(
    achievement_type: AchievementType,
    name: &'static str,
    position: &'static str,
    level: &'static str,
) -> AlumniAchievement {
    AlumniAchievement {
        achievement_type,
        name,
        position,
        level,
    }
}

const fn suggest(
    achievement_type: AchievementType,
    name: &'static str,
    reason: &'static str,
    priority: Priority,
) -> Suggestion {
    Suggestion {
        achievement_type,
        name,
        reason,
        priority,
        level: None,
    }
}

pub static ALUMNI: &[AlumniRecord] = &[
    AlumniRecord {
        id: "ALUMNI_001",
        name: "Priya Sharma",
        graduation_year: 2022,
        department: "CSE",
        current_role: "Software Engineer at Google",
        career_path: "Software Development",
        achievements: &[
            ach(Hackathon, "Smart India Hackathon", "1st", "National"),
            ach(Hackathon, "Google Code Jam", "Top 100", "International"),
            ach(Coding, "LeetCode Contest", "Top 5%", "International"),
            ach(Project, "AI Chatbot for Healthcare", "Best Innovation", "College"),
            ach(Paper, "IEEE Conference on ML", "Published", "International"),
        ],
        skills: &["Python", "Machine Learning", "System Design", "Cloud Computing", "DSA"],
        time_to_placement_months: 2,
        placement_package_lpa: 45,
        tips: "Focus on competitive programming and build at least 2 major projects",
    },
    AlumniRecord {
        id: "ALUMNI_002",
        name: "Rahul Verma",
        graduation_year: 2023,
        department: "CSE",
        current_role: "Data Scientist at Microsoft",
        career_path: "Data Science",
        achievements: &[
            ach(Paper, "International Journal of Data Science", "Published", "International"),
            ach(Paper, "NeurIPS Workshop", "Accepted", "International"),
            ach(Hackathon, "Analytics Vidhya Hackathon", "2nd", "National"),
            ach(Project, "Predictive Maintenance System", "1st", "State"),
            ach(Internship, "Microsoft Research Intern", "Completed", "International"),
        ],
        skills: &["Python", "Deep Learning", "Statistics", "SQL", "TensorFlow", "Research"],
        time_to_placement_months: 1,
        placement_package_lpa: 42,
        tips: "Publish research papers early and participate in ML competitions",
    },
    AlumniRecord {
        id: "ALUMNI_003",
        name: "Ananya Reddy",
        graduation_year: 2022,
        department: "IT",
        current_role: "Full Stack Developer at Amazon",
        career_path: "Web Development",
        achievements: &[
            ach(Hackathon, "AWS Hackathon", "Winner", "National"),
            ach(Project, "E-commerce Platform", "Best Project", "College"),
            ach(Coding, "HackerRank", "5-star", "International"),
            ach(Symposium, "Web Dev Symposium", "1st", "State"),
            ach(Internship, "Amazon SDE Intern", "Completed", "International"),
        ],
        skills: &["JavaScript", "React", "Node.js", "AWS", "MongoDB", "System Design"],
        time_to_placement_months: 1,
        placement_package_lpa: 38,
        tips: "Build full-stack projects and get cloud certifications",
    },
    AlumniRecord {
        id: "ALUMNI_004",
        name: "Vikram Singh",
        graduation_year: 2023,
        department: "ECE",
        current_role: "Embedded Systems Engineer at Intel",
        career_path: "Embedded Systems",
        achievements: &[
            ach(Project, "IoT Smart Home System", "1st", "National"),
            ach(Paper, "IEEE Embedded Systems Conference", "Published", "International"),
            ach(Hackathon, "Texas Instruments Innovation Challenge", "Finalist", "National"),
            ach(Symposium, "Robotics Symposium", "2nd", "State"),
        ],
        skills: &["C", "C++", "RTOS", "Arduino", "Raspberry Pi", "PCB Design"],
        time_to_placement_months: 3,
        placement_package_lpa: 28,
        tips: "Work on hardware projects and get hands-on with microcontrollers",
    },
    AlumniRecord {
        id: "ALUMNI_005",
        name: "Sneha Patel",
        graduation_year: 2022,
        department: "CSE",
        current_role: "Product Manager at Flipkart",
        career_path: "Product Management",
        achievements: &[
            ach(Hackathon, "Product Case Competition", "Winner", "National"),
            ach(Project, "User Analytics Dashboard", "Best UI/UX", "College"),
            ach(Symposium, "Tech Management Symposium", "1st", "State"),
            ach(Internship, "Flipkart PM Intern", "Completed", "National"),
            ach(Paper, "Product Strategy Journal", "Published", "National"),
        ],
        skills: &["Product Strategy", "Data Analysis", "SQL", "Figma", "A/B Testing"],
        time_to_placement_months: 2,
        placement_package_lpa: 32,
        tips: "Develop business acumen alongside technical skills",
    },
    AlumniRecord {
        id: "ALUMNI_006",
        name: "Arjun Kumar",
        graduation_year: 2023,
        department: "CSE",
        current_role: "Security Engineer at Cisco",
        career_path: "Cybersecurity",
        achievements: &[
            ach(Hackathon, "CTF Competition", "1st", "National"),
            ach(Coding, "Bug Bounty Program", "Hall of Fame", "International"),
            ach(Paper, "Security Research Publication", "Published", "International"),
            ach(Project, "Network Intrusion Detection", "Best Innovation", "State"),
        ],
        skills: &["Network Security", "Penetration Testing", "Python", "Linux", "Cryptography"],
        time_to_placement_months: 2,
        placement_package_lpa: 35,
        tips: "Participate in CTFs and contribute to security research",
    },
    AlumniRecord {
        id: "ALUMNI_007",
        name: "Meera Iyer",
        graduation_year: 2022,
        department: "IT",
        current_role: "DevOps Engineer at Netflix",
        career_path: "DevOps/Cloud",
        achievements: &[
            ach(Project, "CI/CD Pipeline Automation", "Best Implementation", "College"),
            ach(Hackathon, "Cloud Native Hackathon", "2nd", "National"),
            ach(Coding, "AWS Certified Solutions Architect", "Certified", "International"),
            ach(Symposium, "DevOps Conference", "Speaker", "National"),
        ],
        skills: &["Docker", "Kubernetes", "AWS", "Terraform", "Jenkins", "Linux"],
        time_to_placement_months: 1,
        placement_package_lpa: 40,
        tips: "Get cloud certifications and build infrastructure projects",
    },
    AlumniRecord {
        id: "ALUMNI_008",
        name: "Karthik Nair",
        graduation_year: 2023,
        department: "CSE",
        current_role: "Mobile Developer at Swiggy",
        career_path: "Mobile Development",
        achievements: &[
            ach(Project, "Food Delivery App Clone", "1st", "College"),
            ach(Hackathon, "Mobile App Challenge", "Winner", "State"),
            ach(Coding, "Play Store Published Apps", "3 Apps", "International"),
            ach(Internship, "Swiggy Android Intern", "Completed", "National"),
        ],
        skills: &["Kotlin", "Flutter", "React Native", "Firebase", "REST APIs"],
        time_to_placement_months: 2,
        placement_package_lpa: 25,
        tips: "Publish apps on Play Store and contribute to open source",
    },
];

/// Importance of each achievement type per career path. Prediction walks this
/// table in order, so ties resolve to the earlier path.
pub static CAREER_PATH_WEIGHTS: &[CareerPathWeights] = &[
    CareerPathWeights {
        career_path: "Software Development",
        weights: &[
            (Hackathon, 0.25),
            (Coding, 0.25),
            (Project, 0.20),
            (Paper, 0.10),
            (Internship, 0.15),
            (Symposium, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Data Science",
        weights: &[
            (Paper, 0.30),
            (Project, 0.20),
            (Hackathon, 0.15),
            (Coding, 0.15),
            (Internship, 0.15),
            (Symposium, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Web Development",
        weights: &[
            (Project, 0.30),
            (Hackathon, 0.20),
            (Coding, 0.20),
            (Internship, 0.15),
            (Symposium, 0.10),
            (Paper, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Cybersecurity",
        weights: &[
            (Hackathon, 0.25),
            (Coding, 0.20),
            (Paper, 0.20),
            (Project, 0.20),
            (Internship, 0.10),
            (Symposium, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "DevOps/Cloud",
        weights: &[
            (Project, 0.25),
            (Coding, 0.25),
            (Hackathon, 0.15),
            (Internship, 0.20),
            (Symposium, 0.10),
            (Paper, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Mobile Development",
        weights: &[
            (Project, 0.30),
            (Coding, 0.20),
            (Hackathon, 0.20),
            (Internship, 0.15),
            (Symposium, 0.10),
            (Paper, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Product Management",
        weights: &[
            (Hackathon, 0.20),
            (Project, 0.25),
            (Internship, 0.25),
            (Paper, 0.10),
            (Symposium, 0.15),
            (Coding, 0.05),
        ],
    },
    CareerPathWeights {
        career_path: "Embedded Systems",
        weights: &[
            (Project, 0.30),
            (Paper, 0.20),
            (Hackathon, 0.20),
            (Symposium, 0.15),
            (Internship, 0.10),
            (Coding, 0.05),
        ],
    },
];

pub static ACHIEVEMENT_SUGGESTIONS: &[SuggestionSet] = &[
    SuggestionSet {
        career_path: "Software Development",
        suggestions: &[
            suggest(
                Hackathon,
                "Smart India Hackathon",
                "National-level exposure and real problem-solving",
                Priority::High,
            ),
            suggest(
                Coding,
                "LeetCode/Codeforces Contests",
                "Improves DSA skills critical for interviews",
                Priority::High,
            ),
            suggest(
                Project,
                "Full-stack Application",
                "Demonstrates end-to-end development capability",
                Priority::Medium,
            ),
            suggest(
                Internship,
                "Summer SDE Internship",
                "Industry experience significantly boosts placement",
                Priority::High,
            ),
        ],
    },
    SuggestionSet {
        career_path: "Data Science",
        suggestions: &[
            suggest(
                Paper,
                "IEEE/ACM Conference Paper",
                "Research publications highly valued in ML roles",
                Priority::High,
            ),
            suggest(
                Hackathon,
                "Kaggle Competition",
                "Practical ML experience with real datasets",
                Priority::High,
            ),
            suggest(
                Project,
                "End-to-end ML Pipeline",
                "Shows ability to deploy ML models",
                Priority::Medium,
            ),
            suggest(
                Internship,
                "Data Science Internship",
                "Industry experience with real data",
                Priority::High,
            ),
        ],
    },
    SuggestionSet {
        career_path: "Web Development",
        suggestions: &[
            suggest(
                Project,
                "Production-ready Web App",
                "Portfolio projects are essential",
                Priority::High,
            ),
            suggest(
                Hackathon,
                "Web Development Hackathon",
                "Quick prototyping skills",
                Priority::Medium,
            ),
            suggest(
                Coding,
                "Cloud Certification (AWS/GCP)",
                "Cloud skills are must-have",
                Priority::High,
            ),
            suggest(
                Internship,
                "Full Stack Internship",
                "Real-world codebase experience",
                Priority::High,
            ),
        ],
    },
    SuggestionSet {
        career_path: "Cybersecurity",
        suggestions: &[
            suggest(
                Hackathon,
                "CTF Competition",
                "Practical security skills demonstration",
                Priority::High,
            ),
            suggest(
                Coding,
                "Bug Bounty Program",
                "Real vulnerability discovery experience",
                Priority::High,
            ),
            suggest(
                Paper,
                "Security Research",
                "Published research adds credibility",
                Priority::Medium,
            ),
            suggest(
                Project,
                "Security Tool Development",
                "Shows practical application of knowledge",
                Priority::Medium,
            ),
        ],
    },
];

/// Keyed by `"{type}_{level}"`. Only a few keys are reachable from the
/// suggestion catalog; misses are expected.
pub static STATISTICAL_INSIGHTS: &[(&str, &str)] = &[
    (
        "Hackathon_National",
        "Students who won national hackathons got placed 40% faster on average",
    ),
    (
        "Paper_International",
        "Alumni with international publications received 25% higher packages",
    ),
    (
        "Internship_Tech",
        "Students with tech internships had 3x higher callback rate",
    ),
    (
        "Coding_Competitive",
        "Top competitive programmers received 35% more interview calls",
    ),
    (
        "Project_FullStack",
        "Full-stack project experience increased offer conversion by 50%",
    ),
    (
        "Multiple_Types",
        "Students with 3+ achievement types had 60% higher placement rate",
    ),
];

pub fn alumni_by_career_path(career_path: &str) -> Vec<&'static AlumniRecord> {
    ALUMNI
        .iter()
        .filter(|alumnus| alumnus.career_path == career_path)
        .collect()
}

pub fn all_career_paths() -> BTreeSet<&'static str> {
    ALUMNI.iter().map(|alumnus| alumnus.career_path).collect()
}

/// Suggestions for `career_path`, or the default path's suggestions when the
/// path has no catalog entry.
pub fn suggestions_for_career_path(career_path: &str) -> &'static [Suggestion] {
    find_suggestions(career_path)
        .or_else(|| find_suggestions(DEFAULT_CAREER_PATH))
        .unwrap_or(&[])
}

fn find_suggestions(career_path: &str) -> Option<&'static [Suggestion]> {
    ACHIEVEMENT_SUGGESTIONS
        .iter()
        .find(|set| set.career_path == career_path)
        .map(|set| set.suggestions)
}

pub fn statistical_insight(key: &str) -> Option<&'static str> {
    STATISTICAL_INSIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, insight)| *insight)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPathListing {
    pub career_paths: BTreeSet<&'static str>,
    pub alumni_count: BTreeMap<&'static str, usize>,
}

pub fn career_path_listing() -> CareerPathListing {
    let career_paths = all_career_paths();
    let alumni_count = career_paths
        .iter()
        .map(|&path| (path, alumni_by_career_path(path).len()))
        .collect();

    CareerPathListing {
        career_paths,
        alumni_count,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniListEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub career_path: &'static str,
    pub department: &'static str,
    pub graduation_year: u16,
    pub achievements_count: usize,
    pub placement_package_lpa: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniListing {
    pub total: usize,
    pub alumni: Vec<AlumniListEntry>,
}

/// All alumni, or only those on `career_path` when given.
pub fn alumni_listing(career_path: Option<&str>) -> AlumniListing {
    let selected: Vec<&'static AlumniRecord> = match career_path {
        Some(path) => alumni_by_career_path(path),
        None => ALUMNI.iter().collect(),
    };

    let alumni: Vec<AlumniListEntry> = selected
        .into_iter()
        .map(|alumnus| AlumniListEntry {
            id: alumnus.id,
            name: alumnus.name,
            role: alumnus.current_role,
            career_path: alumnus.career_path,
            department: alumnus.department,
            graduation_year: alumnus.graduation_year,
            achievements_count: alumnus.achievements.len(),
            placement_package_lpa: alumnus.placement_package_lpa,
        })
        .collect();

    AlumniListing {
        total: alumni.len(),
        alumni,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPathCount {
    pub path: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub total_alumni_profiles: usize,
    pub career_paths: usize,
    pub average_placement_package: f64,
    pub average_placement_time_months: f64,
    pub top_career_paths: Vec<CareerPathCount>,
}

pub fn corpus_stats() -> CorpusStats {
    summarize(ALUMNI)
}

fn summarize(alumni: &[AlumniRecord]) -> CorpusStats {
    let count = alumni.len();
    let average = |total: u32| {
        if count == 0 {
            0.0
        } else {
            round_tenth(total as f64 / count as f64)
        }
    };

    let paths: BTreeSet<&'static str> = alumni.iter().map(|a| a.career_path).collect();
    let mut top_career_paths: Vec<CareerPathCount> = paths
        .iter()
        .map(|&path| CareerPathCount {
            path,
            count: alumni.iter().filter(|a| a.career_path == path).count(),
        })
        .collect();
    top_career_paths.sort_by(|a, b| b.count.cmp(&a.count));

    CorpusStats {
        total_alumni_profiles: count,
        career_paths: paths.len(),
        average_placement_package: average(alumni.iter().map(|a| a.placement_package_lpa).sum()),
        average_placement_time_months: average(
            alumni.iter().map(|a| a.time_to_placement_months).sum(),
        ),
        top_career_paths,
    }
}
