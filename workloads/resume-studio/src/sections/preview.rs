//! Preview section - the resume rendered as a printable page.

use crate::data::Resume;
use crate::sections::html_escape;

/// Render the on-screen resume preview.
pub fn render_preview(resume: &Resume) -> String {
    let skills: String = resume
        .skills
        .iter()
        .map(|group| {
            format!(
                r#"<div class="skill-row"><span class="skill-group">{}</span><span>{}</span></div>"#,
                html_escape(&group.name),
                html_escape(&group.items.join(", "))
            )
        })
        .collect();

    let experience: String = resume
        .experience
        .iter()
        .map(|role| {
            let bullets: String = role
                .bullets
                .iter()
                .map(|b| format!("<li>{}</li>", html_escape(b)))
                .collect();
            format!(
                r#"<div class="role">
        <div class="role-head"><strong>{title}</strong> - {company} <span class="period">{period}</span></div>
        <ul>{bullets}</ul>
    </div>"#,
                title = html_escape(&role.title),
                company = html_escape(&role.company),
                period = html_escape(&role.period),
                bullets = bullets,
            )
        })
        .collect();

    let education: String = resume
        .education
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="edu-row">{}, {} <span class="period">{}</span></div>"#,
                html_escape(&entry.degree),
                html_escape(&entry.school),
                html_escape(&entry.period)
            )
        })
        .collect();

    format!(
        r#"<section class="resume-preview" data-section="preview">
    <header class="resume-head">
        <h2>{name}</h2>
        <p class="resume-sub">{title} - {location}</p>
        <p class="resume-contact">{email} | {website}</p>
    </header>
    <h3>Summary</h3>
    <p>{summary}</p>
    <h3>Skills</h3>
    {skills}
    <h3>Experience</h3>
    {experience}
    <h3>Education</h3>
    {education}
</section>"#,
        name = html_escape(&resume.name),
        title = html_escape(&resume.title),
        location = html_escape(&resume.location),
        email = html_escape(&resume.email),
        website = html_escape(&resume.website),
        summary = html_escape(&resume.summary),
        skills = skills,
        experience = experience,
        education = education,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resume;

    #[test]
    fn test_preview_carries_every_section() {
        let html = render_preview(&resume());
        assert!(html.contains("Arjun Mehta"));
        assert!(html.contains("<h3>Summary</h3>"));
        assert!(html.contains("<h3>Skills</h3>"));
        assert!(html.contains("<h3>Experience</h3>"));
        assert!(html.contains("<h3>Education</h3>"));
    }

    #[test]
    fn test_preview_lists_every_role() {
        let r = resume();
        let html = render_preview(&r);
        for role in &r.experience {
            assert!(html.contains(&role.company));
        }
    }
}
