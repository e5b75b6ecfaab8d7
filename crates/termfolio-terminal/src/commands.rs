//! Built-in portfolio commands and registration of the full command set.

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register every built-in command, in declared order.
///
/// The order matters: tab completion takes the first match and the command
/// reference lists commands as registered.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(SocialCmd));
    crate::register_file_commands(reg);
    crate::register_text_commands(reg);
    crate::register_system_commands(reg);
    crate::register_network_commands(reg);
    crate::register_shell_commands(reg);
    crate::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Commands advertised by `help`; everything else is in the reference.
const HELP_TOPICS: &[&str] = &[
    "about", "skills", "projects", "resume", "contact", "social", "clear",
];

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let mut lines: Vec<String> = HELP_TOPICS
            .iter()
            .filter_map(|name| {
                let desc = env.registry?.get(name)?.description();
                Some(format!("  {name:<10}- {desc}"))
            })
            .collect();
        lines.push(String::new());
        lines.push(
            "Tip: Type '?' for the full command reference, or 'man <command>' for details."
                .to_string(),
        );
        CommandOutput::section("Available Commands", lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn more about me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let about = env.content.about();
        let body = format!(
            "{}\n\n{}\n\nLocation: {}\nStatus:   {}",
            about.greeting, about.bio, about.location, about.status
        );
        CommandOutput::section("About Me", body)
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "View my technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let skills = env.content.skills();
        if skills.is_empty() {
            return CommandOutput::section("Technical Skills", "No skills listed yet.");
        }
        let body = skills
            .iter()
            .map(|cat| {
                let chips: Vec<String> = cat.items.iter().map(|s| format!("[{s}]")).collect();
                format!("{}\n  {}", cat.category, chips.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        CommandOutput::section("Technical Skills", body)
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Browse my projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let projects = env.content.projects();
        if projects.is_empty() {
            return CommandOutput::section("Projects", "No projects listed yet.");
        }
        let mut blocks = Vec::with_capacity(projects.len());
        for (i, project) in projects.iter().enumerate() {
            let mut block = format!("[{}] {}", i + 1, project.name);
            if project.featured {
                block.push_str("  (Featured)");
            }
            block.push_str(&format!("\n    {}", project.description));
            if !project.tech.is_empty() {
                block.push_str(&format!("\n    Tech: {}", project.tech.join(", ")));
            }
            let mut links = Vec::new();
            if let Some(url) = &project.github {
                links.push(format!("[GitHub] {url}"));
            }
            if let Some(url) = &project.live {
                links.push(format!("[Live Demo] {url}"));
            }
            if !links.is_empty() {
                block.push_str(&format!("\n    {}", links.join("  ")));
            }
            blocks.push(block);
        }
        CommandOutput::section("Projects", blocks.join("\n\n"))
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "View my resume/experience"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let mut lines = vec!["Work Experience".to_string()];
        for exp in env.content.experience() {
            lines.push(format!("  {}", exp.title));
            lines.push(format!("  {} | {}", exp.company, exp.period));
            for highlight in &exp.highlights {
                lines.push(format!("    - {highlight}"));
            }
        }
        lines.push(String::new());
        lines.push("Education".to_string());
        for edu in env.content.education() {
            lines.push(format!("  {}", edu.degree));
            lines.push(format!("  {} | {}", edu.school, edu.period));
        }
        lines.push(String::new());
        lines.push(format!(
            "[Download Full Resume PDF] {}",
            env.content.resume_location()
        ));
        CommandOutput::section("Resume / Experience", lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get my contact information"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let contact = env.content.contact();
        let mut lines = vec![format!("Email:    {}", contact.email)];
        if let Some(phone) = &contact.phone {
            lines.push(format!("Phone:    {phone}"));
        }
        lines.push(format!("Location: {}", env.content.about().location));
        lines.push(String::new());
        lines.push(
            "Feel free to reach out! I'm always open to discussing new opportunities, \
             collaborations, or just having a chat about technology."
                .to_string(),
        );
        CommandOutput::section("Contact Information", lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// social
// ---------------------------------------------------------------------------

struct SocialCmd;
impl Command for SocialCmd {
    fn name(&self) -> &str {
        "social"
    }
    fn description(&self) -> &str {
        "Find me on social media"
    }
    fn usage(&self) -> &str {
        "social"
    }
    fn category(&self) -> &str {
        "portfolio"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> CommandOutput {
        let links = env.content.social_links();
        if links.is_empty() {
            return CommandOutput::section("Social Links", "No links listed yet.");
        }
        let rows: Vec<Vec<String>> = links
            .iter()
            .map(|l| vec![format!("[{}]", l.icon), l.name.clone(), l.url.clone()])
            .collect();
        CommandOutput::section("Social Links", crate::interpreter::format_columns(&rows))
    }
}
