//! Project-discussion flow state machine.
//!
//! Drives the multi-step modal on the projects page: pick a project type,
//! scope it, leave contact details, review, send. Steps gate on the data the
//! previous ones collected; the flow itself never talks to the network - the
//! modal submits the reviewed payload and marks the flow sent on success.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from illegal flow transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("missing before {step}: {missing}")]
    Incomplete { step: String, missing: String },
}

/// What kind of project the visitor wants to discuss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Website,
    WebApp,
    Ecommerce,
    Other,
}

impl ProjectType {
    /// All project types, in selector order.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Website,
        ProjectType::WebApp,
        ProjectType::Ecommerce,
        ProjectType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::WebApp => "web-app",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Website => "Marketing Website",
            ProjectType::WebApp => "Web Application",
            ProjectType::Ecommerce => "E-commerce Store",
            ProjectType::Other => "Something Else",
        }
    }
}

/// Steps in the inquiry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryStep {
    /// Choose a project type.
    ProjectType,
    /// Budget and timeline.
    Scope,
    /// Name, email, message.
    Contact,
    /// Review before sending.
    Review,
    /// Inquiry delivered.
    Sent,
}

impl InquiryStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStep::ProjectType => "project-type",
            InquiryStep::Scope => "scope",
            InquiryStep::Contact => "contact",
            InquiryStep::Review => "review",
            InquiryStep::Sent => "sent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InquiryStep::ProjectType => "Project",
            InquiryStep::Scope => "Scope",
            InquiryStep::Contact => "Contact",
            InquiryStep::Review => "Review",
            InquiryStep::Sent => "Sent",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            InquiryStep::ProjectType => 1,
            InquiryStep::Scope => 2,
            InquiryStep::Contact => 3,
            InquiryStep::Review => 4,
            InquiryStep::Sent => 5,
        }
    }
}

/// Inquiry flow state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryFlow {
    /// Current step.
    pub step: InquiryStep,
    /// Completed steps.
    pub completed_steps: Vec<InquiryStep>,
    /// Selected project type.
    pub project_type: Option<ProjectType>,
    /// Budget range, free text from the selector.
    pub budget: Option<String>,
    /// Timeline, free text from the selector.
    pub timeline: Option<String>,
    /// Visitor name.
    pub name: String,
    /// Visitor email.
    pub email: String,
    /// Project description.
    pub message: String,
}

impl Default for InquiryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl InquiryFlow {
    /// Start a fresh flow at the first step.
    pub fn new() -> Self {
        Self {
            step: InquiryStep::ProjectType,
            completed_steps: Vec::new(),
            project_type: None,
            budget: None,
            timeline: None,
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    /// Check if the flow can advance to a step.
    pub fn can_advance_to(&self, step: InquiryStep) -> bool {
        match step {
            InquiryStep::ProjectType => true,
            InquiryStep::Scope => self.project_type.is_some(),
            InquiryStep::Contact => self.project_type.is_some() && self.scope_complete(),
            InquiryStep::Review => {
                self.can_advance_to(InquiryStep::Contact) && self.contact_complete()
            }
            InquiryStep::Sent => self.can_advance_to(InquiryStep::Review),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<InquiryStep, InquiryError> {
        let next = match self.step {
            InquiryStep::ProjectType => InquiryStep::Scope,
            InquiryStep::Scope => InquiryStep::Contact,
            InquiryStep::Contact => InquiryStep::Review,
            InquiryStep::Review => InquiryStep::Sent,
            InquiryStep::Sent => {
                return Err(InquiryError::InvalidTransition {
                    from: "sent".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(InquiryError::Incomplete {
                step: next.as_str().to_string(),
                missing: self.missing_for_step(next).join(", "),
            });
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;

        Ok(next)
    }

    /// Go back to the previous step. Not available once sent.
    pub fn go_back(&mut self) -> Result<InquiryStep, InquiryError> {
        let prev = match self.step {
            InquiryStep::ProjectType => {
                return Err(InquiryError::InvalidTransition {
                    from: "project-type".to_string(),
                    to: "none".to_string(),
                })
            }
            InquiryStep::Scope => InquiryStep::ProjectType,
            InquiryStep::Contact => InquiryStep::Scope,
            InquiryStep::Review => InquiryStep::Contact,
            InquiryStep::Sent => {
                return Err(InquiryError::InvalidTransition {
                    from: "sent".to_string(),
                    to: "review".to_string(),
                })
            }
        };

        self.step = prev;
        Ok(prev)
    }

    /// Go to a specific step (if completed, current, or next-and-ready).
    pub fn go_to(&mut self, step: InquiryStep) -> Result<(), InquiryError> {
        if step == self.step || self.completed_steps.contains(&step) {
            self.step = step;
            Ok(())
        } else if self.can_advance_to(step) && step.number() == self.step.number() + 1 {
            self.advance()?;
            Ok(())
        } else {
            Err(InquiryError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: step.as_str().to_string(),
            })
        }
    }

    /// Get what's missing to advance to a step.
    fn missing_for_step(&self, step: InquiryStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            InquiryStep::Scope => {
                if self.project_type.is_none() {
                    missing.push("project type");
                }
            }
            InquiryStep::Contact => {
                if self.project_type.is_none() {
                    missing.push("project type");
                }
                if self.budget.is_none() {
                    missing.push("budget");
                }
                if self.timeline.is_none() {
                    missing.push("timeline");
                }
            }
            InquiryStep::Review | InquiryStep::Sent => {
                missing.extend(self.missing_for_step(InquiryStep::Contact));
                if self.name.trim().is_empty() {
                    missing.push("name");
                }
                if self.email.trim().is_empty() {
                    missing.push("email");
                }
            }
            _ => {}
        }
        missing
    }

    /// Set the project type.
    pub fn set_project_type(&mut self, project_type: ProjectType) {
        self.project_type = Some(project_type);
    }

    /// Set the budget range.
    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = Some(budget.into());
    }

    /// Set the timeline.
    pub fn set_timeline(&mut self, timeline: impl Into<String>) {
        self.timeline = Some(timeline.into());
    }

    /// Set the contact fields.
    pub fn set_contact(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.name = name.into();
        self.email = email.into();
        self.message = message.into();
    }

    fn scope_complete(&self) -> bool {
        self.budget.is_some() && self.timeline.is_some()
    }

    fn contact_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Check if the inquiry has been sent.
    pub fn is_sent(&self) -> bool {
        self.step == InquiryStep::Sent
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 5.0) * 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_starts_at_project_type() {
        let flow = InquiryFlow::new();
        assert_eq!(flow.step, InquiryStep::ProjectType);
        assert!(flow.completed_steps.is_empty());
        assert_eq!(flow.progress_percent(), 20);
    }

    #[test]
    fn test_flow_gates_each_step() {
        let mut flow = InquiryFlow::new();

        // Can't leave the first step without a project type.
        assert!(flow.advance().is_err());

        flow.set_project_type(ProjectType::Ecommerce);
        assert!(flow.advance().is_ok());
        assert_eq!(flow.step, InquiryStep::Scope);

        // Scope needs both budget and timeline.
        flow.set_budget("1-3L");
        assert!(flow.advance().is_err());
        flow.set_timeline("2-3 months");
        assert!(flow.advance().is_ok());
        assert_eq!(flow.step, InquiryStep::Contact);

        assert!(flow.advance().is_err());
        flow.set_contact("Priya", "priya@example.com", "Storefront for my label");
        assert!(flow.advance().is_ok());
        assert_eq!(flow.step, InquiryStep::Review);

        assert!(flow.advance().is_ok());
        assert!(flow.is_sent());
        assert_eq!(flow.progress_percent(), 100);
    }

    #[test]
    fn test_incomplete_error_names_missing_fields() {
        let mut flow = InquiryFlow::new();
        flow.set_project_type(ProjectType::Website);
        flow.step = InquiryStep::Contact;

        let err = flow.advance().unwrap_err();
        match err {
            InquiryError::Incomplete { missing, .. } => {
                assert!(missing.contains("name"));
                assert!(missing.contains("email"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_go_back_and_revisit() {
        let mut flow = InquiryFlow::new();
        flow.set_project_type(ProjectType::WebApp);
        flow.advance().unwrap();
        flow.set_budget("under 1L");
        flow.set_timeline("flexible");
        flow.advance().unwrap();

        assert_eq!(flow.go_back().unwrap(), InquiryStep::Scope);
        // Completed steps can be jumped to directly.
        assert!(flow.go_to(InquiryStep::ProjectType).is_ok());
        // But not skipped forward past the gate.
        assert!(flow.go_to(InquiryStep::Review).is_err());
    }

    #[test]
    fn test_sent_is_terminal() {
        let mut flow = InquiryFlow::new();
        flow.set_project_type(ProjectType::Other);
        flow.set_budget("n/a");
        flow.set_timeline("n/a");
        flow.set_contact("A", "a@b.c", "");
        flow.step = InquiryStep::Review;

        flow.advance().unwrap();
        assert!(flow.advance().is_err());
        assert!(flow.go_back().is_err());
    }

    #[test]
    fn test_cannot_go_back_from_first_step() {
        let mut flow = InquiryFlow::new();
        assert!(flow.go_back().is_err());
    }
}
