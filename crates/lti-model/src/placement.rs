//! Placement kinds.
//!
//! A placement is a named integration point where an external tool surfaces
//! in the host application's UI. The set of placements is fixed: documents
//! referring to a placement outside this set are rejected at the parse
//! boundary rather than carried through the editing session.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A known placement kind.
///
/// Wire names are the `snake_case` form of the variant (e.g.
/// `course_navigation`), both in configuration documents and overlay
/// serialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LtiPlacement {
    AccountNavigation,
    AnalyticsHub,
    AssignmentMenu,
    AssignmentSelection,
    Collaboration,
    CourseAssignmentsMenu,
    CourseNavigation,
    DiscussionTopicMenu,
    EditorButton,
    FileMenu,
    GlobalNavigation,
    HomeworkSubmission,
    LinkSelection,
    MigrationSelection,
    ModuleIndexMenu,
    ModuleMenu,
    ModuleMenuModal,
    PostGrades,
    QuizMenu,
    StudentContextCard,
    SubmissionTypeSelection,
    ToolConfiguration,
    TopNavigation,
    UserNavigation,
    WikiPageMenu,
}

impl LtiPlacement {
    /// Get the wire identifier (e.g. `"course_navigation"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountNavigation => "account_navigation",
            Self::AnalyticsHub => "analytics_hub",
            Self::AssignmentMenu => "assignment_menu",
            Self::AssignmentSelection => "assignment_selection",
            Self::Collaboration => "collaboration",
            Self::CourseAssignmentsMenu => "course_assignments_menu",
            Self::CourseNavigation => "course_navigation",
            Self::DiscussionTopicMenu => "discussion_topic_menu",
            Self::EditorButton => "editor_button",
            Self::FileMenu => "file_menu",
            Self::GlobalNavigation => "global_navigation",
            Self::HomeworkSubmission => "homework_submission",
            Self::LinkSelection => "link_selection",
            Self::MigrationSelection => "migration_selection",
            Self::ModuleIndexMenu => "module_index_menu",
            Self::ModuleMenu => "module_menu",
            Self::ModuleMenuModal => "module_menu_modal",
            Self::PostGrades => "post_grades",
            Self::QuizMenu => "quiz_menu",
            Self::StudentContextCard => "student_context_card",
            Self::SubmissionTypeSelection => "submission_type_selection",
            Self::ToolConfiguration => "tool_configuration",
            Self::TopNavigation => "top_navigation",
            Self::UserNavigation => "user_navigation",
            Self::WikiPageMenu => "wiki_page_menu",
        }
    }

    /// Get the human-readable display name (e.g. "Course Navigation").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AccountNavigation => "Account Navigation",
            Self::AnalyticsHub => "Analytics Hub",
            Self::AssignmentMenu => "Assignment Menu",
            Self::AssignmentSelection => "Assignment Selection",
            Self::Collaboration => "Collaboration",
            Self::CourseAssignmentsMenu => "Course Assignments Menu",
            Self::CourseNavigation => "Course Navigation",
            Self::DiscussionTopicMenu => "Discussion Topic Menu",
            Self::EditorButton => "Editor Button",
            Self::FileMenu => "File Menu",
            Self::GlobalNavigation => "Global Navigation",
            Self::HomeworkSubmission => "Homework Submission",
            Self::LinkSelection => "Link Selection",
            Self::MigrationSelection => "Migration Selection",
            Self::ModuleIndexMenu => "Modules Index Menu",
            Self::ModuleMenu => "Module Menu",
            Self::ModuleMenuModal => "Module Menu Modal",
            Self::PostGrades => "Sync Grades",
            Self::QuizMenu => "Quiz Menu",
            Self::StudentContextCard => "Student Context Card",
            Self::SubmissionTypeSelection => "Submission Type Selection",
            Self::ToolConfiguration => "Tool Configuration",
            Self::TopNavigation => "Top Navigation",
            Self::UserNavigation => "User Navigation",
            Self::WikiPageMenu => "Page Menu",
        }
    }

    /// Get all known placements in display order.
    pub const fn all() -> &'static [LtiPlacement] {
        &[
            Self::AccountNavigation,
            Self::AnalyticsHub,
            Self::AssignmentMenu,
            Self::AssignmentSelection,
            Self::Collaboration,
            Self::CourseAssignmentsMenu,
            Self::CourseNavigation,
            Self::DiscussionTopicMenu,
            Self::EditorButton,
            Self::FileMenu,
            Self::GlobalNavigation,
            Self::HomeworkSubmission,
            Self::LinkSelection,
            Self::MigrationSelection,
            Self::ModuleIndexMenu,
            Self::ModuleMenu,
            Self::ModuleMenuModal,
            Self::PostGrades,
            Self::QuizMenu,
            Self::StudentContextCard,
            Self::SubmissionTypeSelection,
            Self::ToolConfiguration,
            Self::TopNavigation,
            Self::UserNavigation,
            Self::WikiPageMenu,
        ]
    }
}

impl FromStr for LtiPlacement {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|placement| placement.as_str() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownPlacement {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for LtiPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
