#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub featured: bool,
}

impl Project {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|tag| *tag == category)
    }
}

pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "all", label: "All Projects" },
    FilterOption { value: "web", label: "Web Apps" },
    FilterOption { value: "mobile", label: "Mobile" },
    FilterOption { value: "data", label: "Data & ML" },
    FilterOption { value: "tools", label: "Tools" },
    FilterOption { value: "games", label: "Games" },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack storefront with cart, checkout and an admin dashboard for inventory.",
        categories: &["web"],
        tech: &["React", "Node.js", "MongoDB"],
        image: "assets/images/project1.jpg",
        featured: true,
    },
    Project {
        title: "Task Manager",
        description: "Collaborative task board with drag and drop columns and live updates.",
        categories: &["web", "tools"],
        tech: &["Vue", "Firebase"],
        image: "assets/images/project2.jpg",
        featured: true,
    },
    Project {
        title: "Weather Dashboard",
        description: "City forecasts with hourly charts and saved locations.",
        categories: &["web", "data"],
        tech: &["JavaScript", "Chart.js", "OpenWeather API"],
        image: "assets/images/project3.jpg",
        featured: true,
    },
    Project {
        title: "Fitness Tracker",
        description: "Mobile app for logging workouts and tracking personal records over time.",
        categories: &["mobile"],
        tech: &["Flutter", "Dart", "SQLite"],
        image: "assets/images/project4.jpg",
        featured: true,
    },
    Project {
        title: "Sales Forecasting",
        description: "Time series model predicting weekly store sales from historical data.",
        categories: &["data"],
        tech: &["Python", "Pandas", "scikit-learn"],
        image: "assets/images/project5.jpg",
        featured: true,
    },
    Project {
        title: "Chat Application",
        description: "Real-time messaging with rooms, typing indicators and message history.",
        categories: &["web", "mobile"],
        tech: &["Socket.io", "Express", "React Native"],
        image: "assets/images/project6.jpg",
        featured: true,
    },
    Project {
        title: "Portfolio Generator",
        description: "CLI that turns a YAML file into a static portfolio site.",
        categories: &["tools"],
        tech: &["Node.js", "Handlebars"],
        image: "assets/images/project7.jpg",
        featured: false,
    },
    Project {
        title: "Recipe Finder",
        description: "Search recipes by ingredients you already have at home.",
        categories: &["web"],
        tech: &["JavaScript", "REST API", "CSS Grid"],
        image: "assets/images/project8.jpg",
        featured: false,
    },
    Project {
        title: "Budget Planner",
        description: "Personal finance app with monthly envelopes and spending reports.",
        categories: &["mobile", "data"],
        tech: &["Kotlin", "Room"],
        image: "assets/images/project9.jpg",
        featured: false,
    },
    Project {
        title: "Sentiment Analyzer",
        description: "Classifies product reviews as positive, neutral or negative.",
        categories: &["data"],
        tech: &["Python", "NLTK", "Flask"],
        image: "assets/images/project10.jpg",
        featured: false,
    },
    Project {
        title: "Markdown Notes",
        description: "Offline-first note taking with markdown preview and tags.",
        categories: &["tools", "web"],
        tech: &["TypeScript", "IndexedDB"],
        image: "assets/images/project11.jpg",
        featured: false,
    },
    Project {
        title: "Quiz Platform",
        description: "Timed quizzes with leaderboards and shareable results.",
        categories: &["web"],
        tech: &["PHP", "MySQL", "Bootstrap"],
        image: "assets/images/project12.jpg",
        featured: false,
    },
    Project {
        title: "Inventory Scanner",
        description: "Barcode scanning app that syncs stock counts to a spreadsheet.",
        categories: &["mobile", "tools"],
        tech: &["Swift", "Google Sheets API"],
        image: "assets/images/project13.jpg",
        featured: false,
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

/// Featured projects grouped into slides of `per_slide` cards.
pub fn featured_slides(per_slide: usize) -> Vec<Vec<&'static Project>> {
    let featured: Vec<&'static Project> = PROJECTS.iter().filter(|project| project.featured).collect();
    featured
        .chunks(per_slide.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn featured_projects_fill_two_slides() {
        let slides = featured_slides(3);
        assert_eq!(slides.len(), 2);
        assert!(slides.iter().all(|slide| slide.len() == 3));
    }

    #[test]
    fn zero_per_slide_is_treated_as_one() {
        assert_eq!(featured_slides(0).len(), 6);
    }

    #[test]
    fn every_category_has_a_filter_button() {
        for project in all_projects() {
            for category in project.categories {
                assert!(
                    FILTER_OPTIONS.iter().any(|option| option.value == *category),
                    "{category}"
                );
            }
        }
    }
}
