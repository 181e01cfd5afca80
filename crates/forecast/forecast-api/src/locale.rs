//! Static English/Arabic string table and insight rendering.
//!
//! Text is looked up by [`TextKey`]; nothing here depends on how numbers
//! were computed. Templates use `{name}` placeholders filled by
//! [`render_insight`].

use std::fmt;
use std::str::FromStr;

use forecast_spi::{ForecastError, Insight, Recommendation, TrendDirection};
use serde::{Deserialize, Serialize};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Right-to-left script.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub fn text(self, key: TextKey) -> &'static str {
        match self {
            Language::English => english(key),
            Language::Arabic => arabic(key),
        }
    }

    /// Label for a trend direction.
    pub fn direction(self, direction: TrendDirection) -> &'static str {
        self.text(match direction {
            TrendDirection::Increasing => TextKey::Increasing,
            TrendDirection::Decreasing => TextKey::Decreasing,
            TrendDirection::Stable => TextKey::Stable,
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" | "العربية" => Ok(Language::Arabic),
            other => Err(ForecastError::invalid_parameter(
                "language",
                format!("unsupported language '{}'", other),
            )),
        }
    }
}

/// Every piece of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppTitle,
    Language,
    Dashboard,
    SalesForecast,
    AiInsights,
    DataManagement,
    TotalRevenue,
    AverageSales,
    Trend,
    FitQuality,
    SalesOverview,
    GenerateForecast,
    ForecastChart,
    InsightTitle,
    AddData,
    Month,
    Sales,
    AddButton,
    ClearButton,
    CurrentData,
    ExportData,
    Increasing,
    Decreasing,
    Stable,
    NoData,
    Recommendations,
    MonthlyComparison,
    Historical,
    Forecast,
    Currency,
    NotAvailable,
    NeedMoreData,
    ForecastGenerated,
    GenerateFirst,
    InsightTrend,
    InsightNext,
    InsightChange,
    GrowthRecommendation,
    GrowthMarketing,
    RetentionRecommendation,
    RetentionMarketing,
}

impl TextKey {
    pub const ALL: [TextKey; 41] = [
        TextKey::AppTitle,
        TextKey::Language,
        TextKey::Dashboard,
        TextKey::SalesForecast,
        TextKey::AiInsights,
        TextKey::DataManagement,
        TextKey::TotalRevenue,
        TextKey::AverageSales,
        TextKey::Trend,
        TextKey::FitQuality,
        TextKey::SalesOverview,
        TextKey::GenerateForecast,
        TextKey::ForecastChart,
        TextKey::InsightTitle,
        TextKey::AddData,
        TextKey::Month,
        TextKey::Sales,
        TextKey::AddButton,
        TextKey::ClearButton,
        TextKey::CurrentData,
        TextKey::ExportData,
        TextKey::Increasing,
        TextKey::Decreasing,
        TextKey::Stable,
        TextKey::NoData,
        TextKey::Recommendations,
        TextKey::MonthlyComparison,
        TextKey::Historical,
        TextKey::Forecast,
        TextKey::Currency,
        TextKey::NotAvailable,
        TextKey::NeedMoreData,
        TextKey::ForecastGenerated,
        TextKey::GenerateFirst,
        TextKey::InsightTrend,
        TextKey::InsightNext,
        TextKey::InsightChange,
        TextKey::GrowthRecommendation,
        TextKey::GrowthMarketing,
        TextKey::RetentionRecommendation,
        TextKey::RetentionMarketing,
    ];
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "AI-Powered Business Management System",
        TextKey::Language => "Language",
        TextKey::Dashboard => "Dashboard",
        TextKey::SalesForecast => "Sales Forecast",
        TextKey::AiInsights => "AI Insights",
        TextKey::DataManagement => "Data Management",
        TextKey::TotalRevenue => "Total Revenue",
        TextKey::AverageSales => "Average Sales",
        TextKey::Trend => "Trend",
        TextKey::FitQuality => "Fit Quality (R²)",
        TextKey::SalesOverview => "Sales Overview",
        TextKey::GenerateForecast => "Generate AI Forecast",
        TextKey::ForecastChart => "Sales Forecast (Next {horizon} Months)",
        TextKey::InsightTitle => "AI-Powered Business Insights",
        TextKey::AddData => "Add Sales Data",
        TextKey::Month => "Month",
        TextKey::Sales => "Sales Amount",
        TextKey::AddButton => "Add Data",
        TextKey::ClearButton => "Clear All Data",
        TextKey::CurrentData => "Current Sales Data",
        TextKey::ExportData => "Export Data",
        TextKey::Increasing => "Increasing",
        TextKey::Decreasing => "Decreasing",
        TextKey::Stable => "Stable",
        TextKey::NoData => "No data available. Please add sales data.",
        TextKey::Recommendations => "Recommendations",
        TextKey::MonthlyComparison => "Monthly Comparison",
        TextKey::Historical => "Historical",
        TextKey::Forecast => "Forecast",
        TextKey::Currency => "SAR",
        TextKey::NotAvailable => "n/a",
        TextKey::NeedMoreData => "Need at least {required} data points to generate forecast!",
        TextKey::ForecastGenerated => "Forecast generated successfully!",
        TextKey::GenerateFirst => "Generate a forecast first to see AI insights!",
        TextKey::InsightTrend => "Sales trend: {direction} ({percent}% monthly).",
        TextKey::InsightNext => "Predicted sales for next month: {amount} {currency}",
        TextKey::InsightChange => "This represents a {change}% change from last month.",
        TextKey::GrowthRecommendation => {
            "Recommendation: Increase inventory to meet growing demand."
        }
        TextKey::GrowthMarketing => "Marketing: Consider expanding your marketing reach.",
        TextKey::RetentionRecommendation => {
            "Recommendation: Focus on customer retention strategies."
        }
        TextKey::RetentionMarketing => {
            "Marketing: Implement promotional campaigns to boost sales."
        }
    }
}

fn arabic(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "مُكَلّف، لإدارة الأعمال بالذكاء الاصطناعي",
        TextKey::Language => "اللغة",
        TextKey::Dashboard => "لوحة القيادة",
        TextKey::SalesForecast => "توقعات المبيعات",
        TextKey::AiInsights => "رؤى الذكاء الاصطناعي",
        TextKey::DataManagement => "إدارة البيانات",
        TextKey::TotalRevenue => "إجمالي الإيرادات",
        TextKey::AverageSales => "متوسط المبيعات",
        TextKey::Trend => "الاتجاه",
        TextKey::FitQuality => "جودة الملاءمة (R²)",
        TextKey::SalesOverview => "نظرة عامة على المبيعات",
        TextKey::GenerateForecast => "إنشاء توقعات الذكاء الاصطناعي",
        TextKey::ForecastChart => "توقعات المبيعات (الأشهر الـ {horizon} القادمة)",
        TextKey::InsightTitle => "رؤى الأعمال بالذكاء الاصطناعي",
        TextKey::AddData => "إضافة بيانات المبيعات",
        TextKey::Month => "الشهر",
        TextKey::Sales => "مبلغ المبيعات",
        TextKey::AddButton => "إضافة بيانات",
        TextKey::ClearButton => "مسح جميع البيانات",
        TextKey::CurrentData => "بيانات المبيعات الحالية",
        TextKey::ExportData => "تصدير البيانات",
        TextKey::Increasing => "متزايد",
        TextKey::Decreasing => "متناقص",
        TextKey::Stable => "مستقر",
        TextKey::NoData => "لا توجد بيانات متاحة. يرجى إضافة بيانات المبيعات.",
        TextKey::Recommendations => "التوصيات",
        TextKey::MonthlyComparison => "مقارنة شهرية",
        TextKey::Historical => "تاريخ",
        TextKey::Forecast => "توقعات",
        TextKey::Currency => "ريال",
        TextKey::NotAvailable => "غير متاح",
        TextKey::NeedMoreData => "تحتاج إلى {required} نقاط بيانات على الأقل لإنشاء التوقعات!",
        TextKey::ForecastGenerated => "تم إنشاء التوقعات بنجاح!",
        TextKey::GenerateFirst => "قم بإنشاء توقعات أولاً لرؤية رؤى الذكاء الاصطناعي!",
        TextKey::InsightTrend => "المبيعات تظهر اتجاه {direction} بنسبة {percent}% شهرياً.",
        TextKey::InsightNext => "المبيعات المتوقعة للشهر القادم: {amount} {currency}",
        TextKey::InsightChange => "هذا يمثل تغيير {change}% عن الشهر الماضي.",
        TextKey::GrowthRecommendation => "التوصية: زيادة المخزون لتلبية الطلب المتزايد.",
        TextKey::GrowthMarketing => "التسويق: فكر في توسيع نطاق التسويق.",
        TextKey::RetentionRecommendation => "التوصية: التركيز على استراتيجيات الاحتفاظ بالعملاء.",
        TextKey::RetentionMarketing => "التسويق: تنفيذ حملات ترويجية لتعزيز المبيعات.",
    }
}

/// Fill `{name}` placeholders in a template.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

/// Whole-unit amount with thousands separators, e.g. `67,000`.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month name for a period index, counting period 0 as January.
///
/// The built-in table starts in January, so its first forecast
/// period (6) is labelled `Jul`.
pub fn month_label(period: usize) -> &'static str {
    MONTHS[period % MONTHS.len()]
}

/// Render the five insight lines: trend, next value, change, recommendation, marketing.
pub fn render_insight(insight: &Insight, lang: Language) -> Vec<String> {
    let percent = format!("{:.1}", insight.trend_percent);
    let amount = format_amount(insight.next_value);
    let change = match insight.change_percent {
        Some(c) => format!("{:+.1}", c),
        None => lang.text(TextKey::NotAvailable).to_string(),
    };

    let (recommendation, marketing) = match insight.recommendation() {
        Recommendation::Growth => (TextKey::GrowthRecommendation, TextKey::GrowthMarketing),
        Recommendation::Retention => (
            TextKey::RetentionRecommendation,
            TextKey::RetentionMarketing,
        ),
    };

    vec![
        fill(
            lang.text(TextKey::InsightTrend),
            &[
                ("direction", lang.direction(insight.direction)),
                ("percent", percent.as_str()),
            ],
        ),
        fill(
            lang.text(TextKey::InsightNext),
            &[
                ("amount", amount.as_str()),
                ("currency", lang.text(TextKey::Currency)),
            ],
        ),
        fill(lang.text(TextKey::InsightChange), &[("change", change.as_str())]),
        lang.text(recommendation).to_string(),
        lang.text(marketing).to_string(),
    ]
}
