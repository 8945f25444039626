use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::jobs::Job;

/// Everything known about the selected job beyond what its card shows.
#[derive(Debug, Clone)]
pub struct JobDetail<'a> {
    pub job: &'a Job,
}

impl<'a> JobDetail<'a> {
    fn lines(&self) -> Vec<Line<'a>> {
        let job = self.job;
        let mut lines = vec![];

        let mut push = |label: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                lines.push(Line::from(vec![
                    Span::from(format!("{label}: ")).bold(),
                    Span::from(value),
                ]));
            }
        };

        push("Type", job.job_type.clone());
        push("Experience", job.experience_level.clone());
        push("Skills", job.skills_required.as_ref().map(|s| s.join(", ")));
        push(
            "Hashtags",
            job.hashtags
                .as_ref()
                .map(|tags| tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ")),
        );
        push("Posted", job.posted_date.clone());
        push(
            "Website",
            job.company.as_ref().and_then(|c| c.website.clone()),
        );
        push("URL", job.job_url.clone());
        push("ID", job.id().map(String::from));

        if let Some(description) = job.description.as_deref() {
            lines.push(Line::default());
            lines.extend(description.lines().map(|line| Line::from(line.to_string())));
        }

        lines
    }
}

impl<'a> Widget for JobDetail<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.job.title()));

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::buffer_lines;

    #[test]
    fn shows_present_fields_only() {
        let job = Job {
            title: Some("Data Analyst".to_string()),
            skills_required: Some(vec!["sql".to_string(), "tableau".to_string()]),
            hashtags: Some(vec!["fresher".to_string()]),
            job_type: Some(String::new()),
            description: Some("Crunch numbers.".to_string()),
            ..Job::default()
        };

        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
        let area = buf.area;
        JobDetail { job: &job }.render(area, &mut buf);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("Data Analyst"));
        assert!(lines[1].contains("Skills: sql, tableau"));
        assert!(lines[2].contains("Hashtags: #fresher"));
        assert!(lines[4].contains("Crunch numbers."));
        assert!(!lines.iter().any(|line| line.contains("Type:")));
    }
}
