//! Static project content rendered by the pages.
//!
//! Every figure here is a fixed sample from the house-price regression
//! write-up; nothing is computed at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const REPOSITORY_URL: &str = "https://github.com/Abdelmalek-Zouaoui/House.prices-linear-regresion";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/abdelmalek-zouaoui-a96865307/";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/Abdelmalek-Zouaoui";
pub const CONTACT_EMAIL: &str = "mailto:abdelmalekzoua@gmail.com";

// =============================================================
// Home
// =============================================================

/// Card on the home page grid linking to one section.
pub struct SectionCard {
    pub href: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTION_CARDS: &[SectionCard] = &[
    SectionCard { href: "/overview", icon: "\u{1F5C4}", title: "Project Overview", description: "Problem statement and dataset" },
    SectionCard { href: "/preprocessing", icon: "\u{1F9F9}", title: "Data Preprocessing", description: "Cleaning and preparing data" },
    SectionCard { href: "/analysis", icon: "\u{1F4CA}", title: "Data Analysis", description: "EDA and visualizations" },
    SectionCard { href: "/modeling", icon: "\u{1F3AF}", title: "Model Building", description: "Feature selection and training" },
    SectionCard { href: "/results", icon: "\u{1F4C8}", title: "Results", description: "Model performance and testing" },
    SectionCard { href: "/concepts", icon: "\u{1F9E0}", title: "Learn Concepts", description: "ML concepts explained" },
    SectionCard { href: "/downloads", icon: "\u{2B07}", title: "Downloads", description: "Get project resources" },
    SectionCard { href: "/about", icon: "\u{1F464}", title: "About", description: "About the author" },
];

// =============================================================
// Overview
// =============================================================

pub const DATASET_FEATURES: &[&str] = &[
    "Area (sq ft)",
    "Stories",
    "Bedrooms",
    "Bathrooms",
    "Parking",
    "Furnishing Status",
    "Location",
    "Age",
];

pub const TOOLS: &[&str] = &["Python", "Pandas", "Seaborn", "Scikit-learn", "Statsmodels", "Matplotlib", "NumPy"];

// =============================================================
// Preprocessing
// =============================================================

pub struct HouseRow {
    pub area: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub stories: u8,
    pub parking: u8,
    pub price: i64,
}

pub const SAMPLE_ROWS: &[HouseRow] = &[
    HouseRow { area: 7420, bedrooms: 4, bathrooms: 1, stories: 3, parking: 2, price: 13_300_000 },
    HouseRow { area: 8960, bedrooms: 4, bathrooms: 4, stories: 4, parking: 3, price: 12_250_000 },
    HouseRow { area: 9960, bedrooms: 3, bathrooms: 2, stories: 2, parking: 2, price: 12_250_000 },
    HouseRow { area: 7500, bedrooms: 4, bathrooms: 2, stories: 2, parking: 3, price: 12_215_000 },
    HouseRow { area: 7420, bedrooms: 4, bathrooms: 1, stories: 3, parking: 2, price: 11_410_000 },
];

pub const ENCODING_CODE: &str = "# Encoding categorical variables
df_encoded = pd.get_dummies(df, columns=['mainroad', 'guestroom', 'basement',
                                         'hotwaterheating', 'airconditioning',
                                         'prefarea', 'furnishingstatus'])

# Scaling numerical features
scaler = MinMaxScaler()
numerical_cols = ['area', 'bedrooms', 'bathrooms', 'stories', 'parking']
df_encoded[numerical_cols] = scaler.fit_transform(df_encoded[numerical_cols])";

pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PREPROCESSING_STEPS: &[Step] = &[
    Step { title: "Handle Missing Values", detail: "Check and clean null values" },
    Step { title: "Encode Categorical Variables", detail: "Use get_dummies for one-hot encoding" },
    Step { title: "Scale Numerical Features", detail: "MinMaxScaler for normalization" },
];

// =============================================================
// Analysis
// =============================================================

pub struct Visualization {
    pub tab: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub alt: &'static str,
    pub insight: &'static str,
}

pub const VISUALIZATIONS: &[Visualization] = &[
    Visualization {
        tab: "Boxplots",
        title: "Boxplots",
        subtitle: "Categorical vs Price",
        alt: "Boxplot visualization",
        insight: "Houses with air conditioning and preferred areas show higher price ranges",
    },
    Visualization {
        tab: "Scatter",
        title: "Scatter Plots",
        subtitle: "Numerical vs Price",
        alt: "Scatter plot visualization",
        insight: "Strong positive correlation between area and price",
    },
    Visualization {
        tab: "Correlation",
        title: "Correlation Heatmap",
        subtitle: "Feature Relationships",
        alt: "Correlation heatmap",
        insight: "Area shows the strongest correlation with price (0.67)",
    },
    Visualization {
        tab: "Pairplot",
        title: "Pairplot",
        subtitle: "Feature Distributions",
        alt: "Pairplot visualization",
        insight: "Clear patterns emerge between area, bedrooms, and price",
    },
];

pub const STRONG_PREDICTORS: &[&str] = &[
    "Area has the strongest correlation with price",
    "Air conditioning significantly increases value",
    "Preferred areas command premium prices",
];

pub const DATA_QUALITY: &[&str] =
    &["No missing values detected", "Normal distribution of price data", "Minimal outliers requiring attention"];

/// Placeholder image until the rendered plots are published.
pub const PLOT_PLACEHOLDER: &str = "/placeholder.svg";

// =============================================================
// Modeling
// =============================================================

pub struct SelectedFeature {
    pub name: &'static str,
    pub importance: f64,
}

pub const SELECTED_FEATURES: &[SelectedFeature] = &[
    SelectedFeature { name: "area", importance: 0.67 },
    SelectedFeature { name: "bathrooms", importance: 0.45 },
    SelectedFeature { name: "stories", importance: 0.32 },
    SelectedFeature { name: "parking", importance: 0.28 },
    SelectedFeature { name: "airconditioning", importance: 0.25 },
    SelectedFeature { name: "prefarea", importance: 0.22 },
];

pub struct DroppedFeature {
    pub name: &'static str,
    pub reason: &'static str,
    pub vif: f64,
}

pub const DROPPED_FEATURES: &[DroppedFeature] = &[
    DroppedFeature { name: "bedrooms", reason: "High VIF (>5)", vif: 6.2 },
    DroppedFeature { name: "guestroom", reason: "Low correlation", vif: 2.1 },
    DroppedFeature { name: "basement", reason: "Multicollinearity", vif: 5.8 },
];

/// Features above this VIF are considered collinear.
pub const VIF_THRESHOLD: f64 = 5.0;

/// Multicollinearity band for a VIF score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VifBand {
    Good,
    Moderate,
    High,
}

impl VifBand {
    /// `< 5` good, `5..=10` moderate, above 10 high.
    #[must_use]
    pub fn from_vif(vif: f64) -> Self {
        if vif < VIF_THRESHOLD {
            Self::Good
        } else if vif <= 10.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "badge badge--good",
            Self::Moderate => "badge badge--warn",
            Self::High => "badge badge--bad",
        }
    }
}

pub const RFE_STEPS: &[&str] = &[
    "Start with all features",
    "Train model and rank features",
    "Remove least important feature",
    "Repeat until optimal set found",
];

// =============================================================
// Results
// =============================================================

pub struct MetricCard {
    pub title: &'static str,
    pub end: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub bar: f64,
    pub caption: &'static str,
    pub accent: &'static str,
}

pub const METRIC_CARDS: &[MetricCard] = &[
    MetricCard {
        title: "Mean Absolute Error",
        end: 1.25,
        prefix: "$",
        suffix: "M",
        bar: 75.0,
        caption: "Average prediction error",
        accent: "blue",
    },
    MetricCard {
        title: "Mean Squared Error",
        end: 2.89,
        prefix: "",
        suffix: "B",
        bar: 60.0,
        caption: "Squared error metric",
        accent: "green",
    },
    MetricCard {
        title: "Root Mean Squared Error",
        end: 1.7,
        prefix: "$",
        suffix: "M",
        bar: 70.0,
        caption: "Standard deviation of errors",
        accent: "purple",
    },
    MetricCard { title: "R\u{b2} Score", end: 67.0, prefix: "", suffix: "%", bar: 67.0, caption: "Variance explained", accent: "orange" },
];

/// Performance summary under the test table. Shares the card shape.
pub const SUMMARY_STATS: &[MetricCard] = &[
    MetricCard { title: "Average Accuracy", end: 95.7, prefix: "", suffix: "%", bar: 95.7, caption: "", accent: "blue" },
    MetricCard { title: "Average Error", end: 0.42, prefix: "$", suffix: "M", bar: 85.0, caption: "", accent: "green" },
    MetricCard {
        title: "Predictions > 90% Accurate",
        end: 100.0,
        prefix: "",
        suffix: "%",
        bar: 100.0,
        caption: "",
        accent: "purple",
    },
];

/// Raw evaluation metrics behind the cards.
pub struct FinalMetrics {
    pub mae: u64,
    pub mse: u64,
    pub rmse: u64,
    pub r2: f64,
}

pub const FINAL_METRICS: FinalMetrics = FinalMetrics { mae: 1_250_000, mse: 2_890_000_000_000, rmse: 1_700_000, r2: 0.67 };

pub struct TestResult {
    pub actual: i64,
    pub predicted: i64,
    pub accuracy: f64,
}

impl TestResult {
    #[must_use]
    pub fn difference(&self) -> i64 {
        self.predicted - self.actual
    }
}

pub const TEST_RESULTS: &[TestResult] = &[
    TestResult { actual: 12_500_000, predicted: 11_800_000, accuracy: 94.4 },
    TestResult { actual: 8_900_000, predicted: 9_200_000, accuracy: 96.6 },
    TestResult { actual: 15_200_000, predicted: 14_500_000, accuracy: 95.4 },
    TestResult { actual: 6_800_000, predicted: 7_100_000, accuracy: 95.6 },
    TestResult { actual: 11_000_000, predicted: 10_600_000, accuracy: 96.4 },
];

pub const TRAINING_CODE: &str = "from sklearn.linear_model import LinearRegression
from sklearn.model_selection import train_test_split
from sklearn.metrics import mean_absolute_error, mean_squared_error, r2_score

# Split the data
X_train, X_test, y_train, y_test = train_test_split(
    X_selected, y, test_size=0.2, random_state=42
)

# Train the model
model = LinearRegression()
model.fit(X_train, y_train)

# Make predictions
y_pred = model.predict(X_test)

# Calculate metrics
mae = mean_absolute_error(y_test, y_pred)
mse = mean_squared_error(y_test, y_pred)
rmse = np.sqrt(mse)
r2 = r2_score(y_test, y_pred)";

pub const STRENGTHS: &[&str] = &[
    "R\u{b2} of 0.67 indicates good predictive power",
    "MAE of $1.25M is reasonable for house prices",
    "Model explains 67% of price variance",
    "Fast training and prediction times",
];

pub const IMPROVEMENTS: &[&str] = &[
    "Some heteroscedasticity in residuals",
    "Could benefit from feature engineering",
    "Non-linear relationships not captured",
    "Outliers may affect predictions",
];

// =============================================================
// Concepts
// =============================================================

pub struct Concept {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub example: &'static str,
    pub code: &'static str,
    pub explanation: &'static str,
}

pub const CONCEPTS: &[Concept] = &[
    Concept {
        id: "linear-regression",
        icon: "\u{1F4C8}",
        title: "Linear Regression",
        summary: "A statistical method that models the relationship between variables using a linear equation.",
        example: "Price = \u{3b2}\u{2080} + \u{3b2}\u{2081}\u{d7}Area + \u{3b2}\u{2082}\u{d7}Bedrooms + ... + \u{3b5}",
        code: "from sklearn.linear_model import LinearRegression

# Create and train the model
model = LinearRegression()
model.fit(X_train, y_train)

# Get coefficients
print(\"Intercept:\", model.intercept_)
print(\"Coefficients:\", model.coef_)",
        explanation: "Linear regression finds the best-fitting straight line through data points by minimizing the sum of squared residuals. It assumes a linear relationship between independent variables (features) and the dependent variable (target).",
    },
    Concept {
        id: "minmax-scaler",
        icon: "\u{26A1}",
        title: "MinMaxScaler",
        summary: "Transforms features by scaling each feature to a given range, typically [0,1].",
        example: "X_scaled = (X - X_min) / (X_max - X_min)",
        code: "from sklearn.preprocessing import MinMaxScaler

scaler = MinMaxScaler()
X_scaled = scaler.fit_transform(X)

# Original: [1000, 5000, 10000]
# Scaled:   [0.0, 0.44, 1.0]",
        explanation: "MinMaxScaler prevents features with larger scales from dominating the model. For example, house area (in sq ft) would overshadow number of bedrooms without scaling.",
    },
    Concept {
        id: "rfe",
        icon: "\u{1F3AF}",
        title: "Recursive Feature Elimination (RFE)",
        summary: "Selects features by recursively eliminating the least important ones.",
        example: "Start with all features \u{2192} Rank \u{2192} Remove worst \u{2192} Repeat",
        code: "from sklearn.feature_selection import RFE

# Select top 6 features
rfe = RFE(estimator=LinearRegression(), n_features_to_select=6)
X_selected = rfe.fit_transform(X, y)

print(\"Selected features:\", rfe.support_)
print(\"Feature ranking:\", rfe.ranking_)",
        explanation: "RFE helps identify the most important features by training the model multiple times and eliminating features with the lowest importance scores until the desired number remains.",
    },
    Concept {
        id: "vif",
        icon: "\u{1F4C9}",
        title: "Variance Inflation Factor (VIF)",
        summary: "Measures how much the variance of a coefficient increases due to multicollinearity.",
        example: "VIF = 1/(1-R\u{b2}) where R\u{b2} is from regressing Xi on other features",
        code: "from statsmodels.stats.outliers_influence import variance_inflation_factor
import pandas as pd

# Calculate VIF for each feature
vif_data = pd.DataFrame()
vif_data[\"Feature\"] = X.columns
vif_data[\"VIF\"] = [variance_inflation_factor(X.values, i)
                   for i in range(len(X.columns))]

# Remove features with VIF > 5
print(vif_data)",
        explanation: "VIF detects multicollinearity between features. High VIF (>5) indicates that a feature can be predicted well by other features, making it redundant and potentially harmful to model stability.",
    },
    Concept {
        id: "mae",
        icon: "\u{1F3AF}",
        title: "Mean Absolute Error (MAE)",
        summary: "Average of absolute differences between predicted and actual values.",
        example: "MAE = \u{3a3}|y\u{1d62} - \u{177}\u{1d62}| / n",
        code: "from sklearn.metrics import mean_absolute_error

# Dummy data for demonstration
y_true = [3, -0.5, 2, 7]
y_pred = [2.5, 0.0, 2, 8]

mae = mean_absolute_error(y_true, y_pred)
print(f\"MAE: {mae:,.0f}\")

# Example: If MAE = 1,250,000
# On average, predictions are off by $1.25M",
        explanation: "MAE gives the average prediction error in the same units as the target variable. It's less sensitive to outliers than MSE and provides an intuitive measure of model accuracy.",
    },
    Concept {
        id: "rmse",
        icon: "\u{1F4CA}",
        title: "Root Mean Squared Error (RMSE)",
        summary: "Square root of the average squared differences between predicted and actual values.",
        example: "RMSE = \u{221a}(\u{3a3}(y\u{1d62} - \u{177}\u{1d62})\u{b2} / n)",
        code: "from sklearn.metrics import mean_squared_error
import numpy as np

# Dummy data for demonstration
y_true = [3, -0.5, 2, 7]
y_pred = [2.5, 0.0, 2, 8]

mse = mean_squared_error(y_true, y_pred)
rmse = np.sqrt(mse)
print(f\"RMSE: {rmse:,.0f}\")

# RMSE penalizes larger errors more than MAE",
        explanation: "RMSE penalizes larger errors more heavily than MAE due to squaring. It is useful when large errors are particularly undesirable. RMSE is always \u{2265} MAE, with equality only when all errors are the same magnitude.",
    },
];

pub const FOUNDATION_PATH: &[&str] =
    &["Linear Regression basics", "Data preprocessing with MinMaxScaler", "Understanding MAE and RMSE"];

pub const ADVANCED_PATH: &[&str] =
    &["Feature selection with RFE", "Multicollinearity and VIF", "Model evaluation strategies"];

// =============================================================
// Downloads
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    Dataset,
    Code,
    Notebook,
    Repository,
}

impl DownloadKind {
    /// Dataset and code are served by this site; the rest link out.
    #[must_use]
    pub fn is_direct(self) -> bool {
        matches!(self, Self::Dataset | Self::Code)
    }
}

pub struct Download {
    pub title: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub features: &'static [&'static str],
    pub url: &'static str,
    pub kind: DownloadKind,
}

pub const DOWNLOADS: &[Download] = &[
    Download {
        title: "Housing Dataset (CSV)",
        description: "Original house price dataset with 545 records and 13 features",
        size: "28 KB",
        features: &["545 House Records", "13 Features", "Clean Data", "Ready for Analysis"],
        url: "/data/Housing.csv",
        kind: DownloadKind::Dataset,
    },
    Download {
        title: "Python Source Code",
        description: "Complete machine learning pipeline implementation",
        size: "15 KB",
        features: &["Data Preprocessing", "Feature Selection", "Model Training", "Evaluation Metrics"],
        url: "/code/LinearRegressionModel.py",
        kind: DownloadKind::Code,
    },
    Download {
        title: "Jupyter Notebook",
        description: "Interactive notebook with visualizations and analysis",
        size: "2.1 MB",
        features: &["Step-by-step Code", "Data Visualizations", "Model Insights", "Reproducible Results"],
        url: REPOSITORY_URL,
        kind: DownloadKind::Notebook,
    },
    Download {
        title: "Complete Repository",
        description: "Full project repository with all files and documentation",
        size: "5.2 MB",
        features: &["All Source Files", "Documentation", "Requirements", "Examples"],
        url: REPOSITORY_URL,
        kind: DownloadKind::Repository,
    },
];

pub const DATASET_COLUMNS: &[&str] = &[
    "price",
    "area",
    "bedrooms",
    "bathrooms",
    "stories",
    "mainroad",
    "guestroom",
    "basement",
    "hotwaterheating",
    "airconditioning",
    "parking",
    "prefarea",
    "furnishingstatus",
];

pub const CODE_HIGHLIGHTS: &[&str] = &[
    "Comprehensive EDA with visualizations",
    "Feature engineering and encoding",
    "RFE for feature selection",
    "VIF analysis for multicollinearity",
    "Model evaluation with multiple metrics",
    "Train/test split and validation",
];

pub const REPOSITORY_CONTENTS: &[&str] = &[
    "Original dataset (Housing.csv)",
    "Complete Python source code",
    "Jupyter notebook with analysis",
    "Requirements and documentation",
];

pub const REPOSITORY_AUDIENCE: &[&str] =
    &["Learning machine learning", "Portfolio projects", "Research and education", "Code reference"];

// =============================================================
// About
// =============================================================

pub const AUTHOR_NAME: &str = "Abdelmalek Zouaoui";
pub const AUTHOR_ROLE: &str = "Data Scientist & Machine Learning Engineer";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Machine Learning and Data Analysis enthusiast, constantly learning and building real-world projects to sharpen my skills and solve meaningful problems. With a strong foundation in data preprocessing, visualization, predictive modeling, and deployment, I transform raw data into actionable insights and intelligent systems.",
    "My projects showcase not only my technical abilities but also my focus on clean, understandable, and production-ready code. I aim to bridge the gap between complex data science concepts and real-world business value.",
    "Whether you're a startup looking to explore the power of your data or an individual with a custom idea, I'd love to collaborate and bring your vision to life through smart, data-driven solutions.",
];

pub const PROJECT_HIGHLIGHTS: &[&str] = &[
    "Built end-to-end ML pipeline with 67% R\u{b2} accuracy",
    "Implemented feature selection using RFE and VIF analysis",
    "Created comprehensive data visualizations and EDA",
    "Developed interactive web presentation with Rust and Leptos",
];

pub const COLLABORATION: &[Step] = &[
    Step { title: "Freelance Projects", detail: "Custom ML solutions" },
    Step { title: "Full-time Opportunities", detail: "Data science roles" },
    Step { title: "Research Collaboration", detail: "Academic partnerships" },
];

// =============================================================
// Footer
// =============================================================

pub struct Technology {
    pub name: &'static str,
    pub category: &'static str,
}

pub const TECH_STACK: &[Technology] = &[
    Technology { name: "Python", category: "Language" },
    Technology { name: "Pandas", category: "Data Processing" },
    Technology { name: "Scikit-learn", category: "Machine Learning" },
    Technology { name: "Seaborn", category: "Visualization" },
    Technology { name: "Matplotlib", category: "Visualization" },
    Technology { name: "NumPy", category: "Numerical Computing" },
    Technology { name: "Statsmodels", category: "Statistics" },
    Technology { name: "Jupyter", category: "Development" },
    Technology { name: "Rust", category: "Language" },
    Technology { name: "Leptos", category: "Frontend" },
    Technology { name: "Axum", category: "Server" },
];

/// CSS modifier for a tech category badge.
#[must_use]
pub fn category_class(category: &str) -> &'static str {
    match category {
        "Language" => "tech-badge tech-badge--language",
        "Data Processing" => "tech-badge tech-badge--data",
        "Machine Learning" => "tech-badge tech-badge--ml",
        "Visualization" => "tech-badge tech-badge--viz",
        "Numerical Computing" => "tech-badge tech-badge--numeric",
        "Statistics" => "tech-badge tech-badge--stats",
        "Development" => "tech-badge tech-badge--dev",
        "Frontend" | "Server" => "tech-badge tech-badge--web",
        _ => "tech-badge",
    }
}
