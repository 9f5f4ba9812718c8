use chrono::{DateTime, Utc};

use assess_core::time::Clock;
use assess_core::model::{
    Certification, FuturePlanEntry, InsightPayload, SkillEntry,
};

use super::model::{ReportModel, StepBlock};

/// Renders a [`ReportModel`] to downloadable markdown or plain text.
///
/// The exporter owns the clock: generation timestamps appear only in its
/// output, never in the model it consumes, and the model is never mutated.
#[derive(Clone)]
pub struct ReportExporter {
    clock: Clock,
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl ReportExporter {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Generation time according to the exporter's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Timestamped download filename for the given extension.
    #[must_use]
    pub fn suggested_filename(&self, extension: &str) -> String {
        let date = self.clock.now().format("%Y-%m-%d");
        format!("Psychological_Assessment_Report_{date}.{extension}")
    }

    /// Render the report as markdown.
    #[must_use]
    pub fn markdown(&self, report: &ReportModel) -> String {
        let mut doc = Doc::new();

        doc.line("# Comprehensive Psychological Assessment Report");
        doc.blank();
        doc.line(format!(
            "**Report generated:** {}",
            self.clock.now().format("%B %d, %Y")
        ));
        doc.line("**Assessment type:** AI-powered psychological profile");
        doc.blank();
        doc.line("---");
        doc.blank();

        if let Some(insights) = &report.insights {
            markdown_insights(&mut doc, insights);
        }

        doc.line("## Detailed Assessment Results");
        doc.blank();
        for block in &report.blocks {
            markdown_block(&mut doc, block);
        }

        doc.line("## Comprehensive Assessment Summary");
        doc.blank();
        doc.line(format!(
            "Based on your responses across {} assessments, you demonstrate a \
             unique combination of personality traits, cognitive abilities, \
             learning preferences and decision-making styles.",
            report.summary.answered
        ));
        doc.blank();
        for line in &report.summary.profile_lines {
            doc.line(format!(
                "- **{}:** {} - {}",
                line.aspect, line.title, line.description
            ));
        }
        doc.blank();
        doc.line("**Key Recommendations:**");
        doc.blank();
        for recommendation in &report.summary.recommendations {
            doc.line(format!("- {recommendation}"));
        }
        doc.blank();

        doc.line("---");
        doc.blank();
        doc.line(
            "*This report is generated from your assessment responses and is \
             intended for educational and self-reflection purposes only.*",
        );

        doc.into_string()
    }

    /// Render the report as the plain-text fallback format.
    #[must_use]
    pub fn plain_text(&self, report: &ReportModel) -> String {
        let mut doc = Doc::new();

        doc.line("COMPREHENSIVE PSYCHOLOGICAL ASSESSMENT REPORT");
        doc.line(format!(
            "Generated on: {}",
            self.clock.now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        doc.blank();
        doc.line(RULE);
        doc.line("DETAILED ASSESSMENT RESULTS");
        doc.line(RULE);
        doc.blank();

        for block in &report.blocks {
            doc.line(format!("{}:", block.name.to_uppercase()));
            doc.line(format!("Result: {}", block.selected.to_uppercase()));
            doc.line(format!("Title: {}", block.profile.title));
            doc.line(format!("Description: {}", block.profile.description));
            if let Some(strengths) = &block.profile.strengths {
                doc.line(format!("Strengths: {strengths}"));
            }
            if let Some(challenges) = &block.profile.challenges {
                doc.line(format!("Challenges: {challenges}"));
            }
            if let Some(careers) = &block.profile.careers {
                doc.line(format!("Career Suggestions: {careers}"));
            }
            doc.blank();
        }

        if let Some(insights) = &report.insights {
            doc.line(RULE);
            doc.line("AI-POWERED INSIGHTS");
            doc.line(RULE);
            doc.blank();
            doc.line(format!(
                "RECOMMENDED CAREER FIELD: {}",
                insights.best_field.field
            ));
            doc.line(format!("REASONING: {}", insights.best_field.reasoning));
            doc.blank();
            doc.line("CAREER RECOMMENDATIONS:");
            for career in &insights.career_recommendations {
                doc.line(format!("- {}: {}", career.job_role, career.explanation));
            }
            doc.blank();
            doc.line("SKILLS TO DEVELOP:");
            doc.line(format!(
                "Technical: {}",
                join_skills(&insights.skill_recommendations.technical_skills)
            ));
            doc.line(format!(
                "Soft Skills: {}",
                join_skills(&insights.skill_recommendations.soft_skills)
            ));
            doc.blank();
            if !insights.daily_habits.is_empty() {
                doc.line("DAILY HABITS:");
                for habit in &insights.daily_habits {
                    doc.line(format!("- {}", habit.name()));
                }
                doc.blank();
            }
        }

        doc.line(RULE);
        doc.line("DISCLAIMER");
        doc.line(RULE);
        doc.blank();
        doc.line(
            "This report is generated based on your responses to psychological \
             assessments and is intended for educational and self-reflection \
             purposes only.",
        );

        doc.into_string()
    }
}

const RULE: &str = "===========================================";

fn join_skills(skills: &[SkillEntry]) -> String {
    if skills.is_empty() {
        return "Not available".to_string();
    }
    skills
        .iter()
        .map(SkillEntry::name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn markdown_insights(doc: &mut Doc, insights: &InsightPayload) {
    doc.line("## AI-Powered Career Guidance");
    doc.blank();
    doc.line("*Personalized recommendations based on your psychological assessment*");
    doc.blank();

    let best = &insights.best_field;
    doc.line("### Best Career Field");
    doc.blank();
    doc.line(format!("**{}**", best.field));
    doc.blank();
    if let Some(percentage) = best.match_percentage {
        doc.line(format!("**Match Percentage: {percentage}%**"));
        doc.blank();
    }
    if !best.reasoning.is_empty() {
        doc.labeled("Reasoning", &best.reasoning);
    }
    if let Some(opportunities) = &best.gujarat_opportunities {
        doc.labeled("Regional Opportunities", opportunities);
    }
    if let Some(outlook) = &best.indian_market_outlook {
        doc.labeled("Market Outlook", outlook);
    }
    if let Some(salary) = &best.salary_expectations {
        doc.labeled("Salary Expectations", salary);
    }
    if !best.specific_companies.is_empty() {
        doc.labeled("Recommended Companies", &best.specific_companies.join(", "));
    }
    if let Some(growth) = &best.growth_potential {
        doc.labeled("Growth Potential", growth);
    }
    if let Some(entry) = &best.entry_requirements {
        doc.labeled("Entry Requirements", entry);
    }

    if !insights.career_recommendations.is_empty() {
        doc.line("### Career Recommendations");
        doc.blank();
        for career in &insights.career_recommendations {
            match &career.industry {
                Some(industry) => doc.line(format!("#### {} ({industry})", career.job_role)),
                None => doc.line(format!("#### {}", career.job_role)),
            }
            doc.blank();
            if !career.explanation.is_empty() {
                doc.line(career.explanation.clone());
                doc.blank();
            }
            if let Some(growth) = &career.growth_potential {
                doc.line(format!("- Growth potential: {growth}"));
            }
            if let Some(salary) = &career.salary_range {
                doc.line(format!("- Salary range: {salary}"));
            }
            if !career.required_skills.is_empty() {
                doc.line(format!(
                    "- Required skills: {}",
                    career.required_skills.join(", ")
                ));
            }
            doc.blank();
        }
    }

    markdown_skills_and_roadmap(doc, insights);
    markdown_analysis(doc, insights);
    markdown_future_plans(doc, insights);

    if !insights.daily_habits.is_empty() {
        doc.line("### Daily Success Habits");
        doc.blank();
        for habit in &insights.daily_habits {
            doc.line(format!("- **{}**", habit.name()));
            if let Some(detail) = habit.detail() {
                if let Some(purpose) = &detail.purpose {
                    doc.line(format!("  - Purpose: {purpose}"));
                }
                if let Some(implementation) = &detail.implementation {
                    doc.line(format!("  - How: {implementation}"));
                }
            }
        }
        doc.blank();
    }

    if !insights.certifications.is_empty() {
        doc.line("### Recommended Certifications");
        doc.blank();
        for certification in &insights.certifications {
            markdown_certification(doc, certification);
        }
    }

    if let Some(additional) = &insights.additional_insights {
        doc.line("### Additional Insights");
        doc.blank();
        if let Some(environment) = &additional.work_environment {
            doc.labeled("Work Environment", environment);
        }
        if let Some(stress) = &additional.stress_management {
            doc.labeled("Stress Management", stress);
        }
        if let Some(advice) = &additional.gujarat_specific_advice {
            doc.labeled("Regional Advice", advice);
        }
    }
}

fn markdown_skills_and_roadmap(doc: &mut Doc, insights: &InsightPayload) {
    let skills = &insights.skill_recommendations;
    let roadmap = &insights.roadmap;
    let has_skills = !skills.technical_skills.is_empty() || !skills.soft_skills.is_empty();
    let has_roadmap =
        roadmap.short_term.is_some() || roadmap.mid_term.is_some() || roadmap.long_term.is_some();
    if !has_skills && !has_roadmap {
        return;
    }

    doc.line("### Skills and Learning Roadmap");
    doc.blank();

    if !skills.technical_skills.is_empty() {
        doc.line("**Technical skills:**");
        doc.blank();
        for skill in &skills.technical_skills {
            doc.skill(skill);
        }
        doc.blank();
    }
    if !skills.soft_skills.is_empty() {
        doc.line("**Soft skills:**");
        doc.blank();
        for skill in &skills.soft_skills {
            doc.skill(skill);
        }
        doc.blank();
    }

    if let Some(short) = &roadmap.short_term {
        doc.phase_heading("Short term", short.duration());
        doc.bullets("Goals", short.goals());
        if let assess_core::model::ShortTermEntry::Detailed(phase) = short {
            doc.bullets("Skills to develop", &phase.skills_to_develop);
            doc.bullets("Resources", &phase.resources);
            doc.bullets("Actions", &phase.specific_actions);
        }
        doc.blank();
    }
    if let Some(mid) = &roadmap.mid_term {
        doc.phase_heading("Mid term", mid.duration());
        doc.bullets("Goals", mid.goals());
        if let assess_core::model::MidTermEntry::Detailed(phase) = mid {
            doc.bullets("Skills to develop", &phase.skills_to_develop);
            doc.bullets("Milestones", &phase.milestones);
        }
        doc.blank();
    }
    if let Some(long) = &roadmap.long_term {
        doc.phase_heading("Long term", long.duration());
        doc.bullets("Goals", long.goals());
        if let assess_core::model::LongTermEntry::Detailed(phase) = long {
            doc.bullets("Expertise areas", &phase.expertise_areas);
            if let Some(entrepreneurship) = &phase.entrepreneurship_opportunities {
                doc.labeled("Entrepreneurship", entrepreneurship);
            }
        }
        doc.blank();
    }
}

fn markdown_analysis(doc: &mut Doc, insights: &InsightPayload) {
    let analysis = &insights.result_analysis;
    if analysis.strengths.is_empty() && analysis.weaknesses.is_empty() {
        return;
    }

    doc.line("### Strengths and Areas for Improvement");
    doc.blank();

    if !analysis.strengths.is_empty() {
        doc.line("**Your strengths:**");
        doc.blank();
        for strength in &analysis.strengths {
            doc.line(format!("- **{}**", strength.name()));
            if let Some(detail) = strength.detail() {
                if let Some(reasoning) = &detail.reasoning {
                    doc.line(format!("  - {reasoning}"));
                }
                if let Some(application) = &detail.career_application {
                    doc.line(format!("  - In your career: {application}"));
                }
            }
        }
        doc.blank();
    }

    if !analysis.weaknesses.is_empty() {
        doc.line("**Areas for improvement:**");
        doc.blank();
        for weakness in &analysis.weaknesses {
            doc.line(format!("- **{}**", weakness.name()));
            if let Some(detail) = weakness.detail() {
                if let Some(reasoning) = &detail.reasoning {
                    doc.line(format!("  - {reasoning}"));
                }
                if let Some(strategy) = &detail.improvement_strategy {
                    doc.line(format!("  - How to improve: {strategy}"));
                }
            }
        }
        doc.blank();
    }
}

fn markdown_future_plans(doc: &mut Doc, insights: &InsightPayload) {
    let plans = &insights.future_plans;
    let horizons: [(&str, &Option<FuturePlanEntry>); 3] = [
        ("3-year plan", &plans.three_year),
        ("5-year plan", &plans.five_year),
        ("10-year vision", &plans.ten_year),
    ];
    if horizons.iter().all(|(_, plan)| plan.is_none()) {
        return;
    }

    doc.line("### Future Growth Plans");
    doc.blank();
    for (label, plan) in horizons {
        let Some(plan) = plan else { continue };
        if let Some(headline) = plan.headline() {
            doc.line(format!("- **{label}:** {headline}"));
        } else {
            doc.line(format!("- **{label}:**"));
        }
        if let Some(detail) = plan.detail() {
            for achievement in &detail.key_achievements {
                doc.line(format!("  - {achievement}"));
            }
            if !detail.expertise_areas.is_empty() {
                doc.line(format!(
                    "  - Expertise: {}",
                    detail.expertise_areas.join(", ")
                ));
            }
            if let Some(potential) = &detail.entrepreneurial_potential {
                doc.line(format!("  - Entrepreneurial potential: {potential}"));
            }
        }
    }
    doc.blank();
}

fn markdown_certification(doc: &mut Doc, certification: &Certification) {
    match &certification.provider {
        Some(provider) => doc.line(format!("#### {} ({provider})", certification.name)),
        None => doc.line(format!("#### {}", certification.name)),
    }
    doc.blank();
    if let Some(why) = &certification.why_recommended {
        doc.line(why.clone());
        doc.blank();
    }
    if let Some(level) = &certification.difficulty_level {
        doc.line(format!("- Level: {level}"));
    }
    if let Some(duration) = &certification.estimated_duration {
        doc.line(format!("- Duration: {duration}"));
    }
    if let Some(url) = certification.enrollment_url() {
        doc.line(format!("- [Enroll now]({url})"));
    }
    doc.blank();
}

fn markdown_block(doc: &mut Doc, block: &StepBlock) {
    doc.line(format!("### {}", block.name));
    doc.blank();
    doc.line(format!("**Result:** {}", block.selected));
    doc.blank();
    doc.line(format!("**{}**", block.profile.title));
    doc.blank();
    doc.line(block.profile.description.clone());
    doc.blank();
    if let Some(strengths) = &block.profile.strengths {
        doc.labeled("Key Strengths", strengths);
    }
    if let Some(challenges) = &block.profile.challenges {
        doc.labeled("Growth Areas", challenges);
    }
    if let Some(careers) = &block.profile.careers {
        doc.labeled("Career Paths", careers);
    }
    if let Some(traits) = &block.profile.traits {
        doc.labeled("Key Traits", &traits.joined());
    }
    if let Some(environment) = &block.profile.work_environment {
        doc.labeled("Ideal Environment", environment);
    }
    if let Some(methods) = &block.profile.learning_methods {
        doc.labeled("Learning Methods", &methods.joined());
    }
    if let Some(tips) = &block.profile.study_tips {
        doc.labeled("Study Tips", &tips.joined());
    }
}

/// Line-oriented text buffer shared by both output formats.
struct Doc {
    buffer: String,
}

impl Doc {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.buffer.push_str(text.as_ref());
        self.buffer.push('\n');
    }

    fn blank(&mut self) {
        self.buffer.push('\n');
    }

    fn labeled(&mut self, label: &str, text: &str) {
        self.line(format!("**{label}:** {text}"));
        self.blank();
    }

    fn skill(&mut self, skill: &SkillEntry) {
        match skill.importance() {
            Some(importance) => self.line(format!("- {} ({importance})", skill.name())),
            None => self.line(format!("- {}", skill.name())),
        }
    }

    fn phase_heading(&mut self, label: &str, duration: Option<&str>) {
        match duration {
            Some(duration) => self.line(format!("#### {label} ({duration})")),
            None => self.line(format!("#### {label}")),
        }
        self.blank();
    }

    fn bullets(&mut self, label: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.line(format!("**{label}:**"));
        for item in items {
            self.line(format!("- {item}"));
        }
        self.blank();
    }

    fn into_string(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use assess_core::model::{AnswerSheet, Step};
    use assess_core::time::fixed_clock;
    use profiles::InMemoryProfiles;

    use crate::report::ReportAssembler;

    fn sample_report(insights: Option<assess_core::model::InsightPayload>) -> ReportModel {
        let assembler = ReportAssembler::new(Arc::new(InMemoryProfiles::builtin()));
        let mut answers = AnswerSheet::new();
        answers.record(Step::Mbti, "INTJ").unwrap();
        answers.record(Step::Vark, "visual").unwrap();
        assembler.build(&answers, insights.as_ref())
    }

    fn sample_insights() -> assess_core::model::InsightPayload {
        serde_json::from_value(serde_json::json!({
            "best_field": {
                "field": "Technology",
                "reasoning": "Strong analytical profile",
                "match_percentage": 92
            },
            "roadmap": {
                "short_term": { "duration": "1-3 months", "goals": ["Learn fundamentals"] },
                "long_term": ["Reach a senior role"]
            },
            "result_analysis": {
                "strengths": ["Analytical thinking"],
                "weaknesses": [{ "weakness": "Delegation", "improvement_strategy": "Pair on handoffs" }]
            },
            "career_recommendations": [
                { "job_role": "Software Developer", "industry": "IT", "explanation": "Fits the profile" }
            ],
            "daily_habits": ["Practice coding daily"],
            "certifications": [
                { "name": "Cloud Practitioner", "provider": "AWS",
                  "direct_enrollment_link": "https://aws.example.com/cert" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn markdown_contains_blocks_and_timestamp() {
        let exporter = ReportExporter::new(fixed_clock());
        let markdown = exporter.markdown(&sample_report(None));

        assert!(markdown.starts_with("# Comprehensive Psychological Assessment Report"));
        assert!(markdown.contains("**Report generated:** May 06, 2024"));
        assert!(markdown.contains("### MBTI Personality"));
        assert!(markdown.contains("**Architect**"));
        assert!(markdown.contains("## Comprehensive Assessment Summary"));
        assert!(!markdown.contains("AI-Powered Career Guidance"));
    }

    #[test]
    fn markdown_renders_insight_sections_when_present() {
        let exporter = ReportExporter::new(fixed_clock());
        let markdown = exporter.markdown(&sample_report(Some(sample_insights())));

        assert!(markdown.contains("## AI-Powered Career Guidance"));
        assert!(markdown.contains("**Match Percentage: 92%**"));
        assert!(markdown.contains("#### Software Developer (IT)"));
        assert!(markdown.contains("#### Short term (1-3 months)"));
        assert!(markdown.contains("- Reach a senior role"));
        assert!(markdown.contains("- **Analytical thinking**"));
        assert!(markdown.contains("[Enroll now](https://aws.example.com/cert)"));
    }

    #[test]
    fn plain_text_matches_fallback_format() {
        let exporter = ReportExporter::new(fixed_clock());
        let text = exporter.plain_text(&sample_report(Some(sample_insights())));

        assert!(text.starts_with("COMPREHENSIVE PSYCHOLOGICAL ASSESSMENT REPORT"));
        assert!(text.contains("MBTI PERSONALITY:"));
        assert!(text.contains("Result: INTJ"));
        assert!(text.contains("RECOMMENDED CAREER FIELD: Technology"));
        assert!(text.contains("Technical: Not available"));
        assert!(text.contains("DISCLAIMER"));
    }

    #[test]
    fn exports_do_not_mutate_the_model() {
        let exporter = ReportExporter::new(fixed_clock());
        let report = sample_report(Some(sample_insights()));
        let before = report.clone();

        let _ = exporter.markdown(&report);
        let _ = exporter.plain_text(&report);
        assert_eq!(report, before);
    }

    #[test]
    fn suggested_filename_is_timestamped() {
        let exporter = ReportExporter::new(fixed_clock());
        assert_eq!(
            exporter.suggested_filename("md"),
            "Psychological_Assessment_Report_2024-05-06.md"
        );
    }
}
