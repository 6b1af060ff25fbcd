use crate::scoring::analyzers::{ResumeDocument, Section, SectionAnalyzer, SectionOutcome};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{
    has_email, has_location, has_name_line, has_phone, has_profile_link,
    leading_line_has_contact,
};

pub struct ContactAnalyzer;

impl SectionAnalyzer for ContactAnalyzer {
    fn section(&self) -> Section {
        Section::ContactInformation
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let (text, lower, tables) = (doc.text, doc.lower.as_str(), doc.tables);

        let mut checklist = Checklist::new();
        checklist
            .check_or("name_plain_text", has_name_line(text), || {
                "Add your full name at the top of the resume in plain text".to_string()
            })
            .check_or("phone_number", has_phone(tables, text), || {
                "Include a phone number in international format".to_string()
            })
            .check_or("professional_email", has_email(tables, text), || {
                "Add a professional email address (avoid casual usernames)".to_string()
            })
            .check_or("location", has_location(tables, text, lower), || {
                "Include your location (City, State) or 'Open to Relocation'".to_string()
            })
            .check_or(
                "linkedin_portfolio",
                has_profile_link(tables, text, lower),
                || "Add LinkedIn profile or portfolio link to improve recruiter visibility".to_string(),
            )
            .check_or("no_header_footer", !leading_line_has_contact(text), || {
                "Move contact details out of the page header into the resume body".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish())
    }
}
