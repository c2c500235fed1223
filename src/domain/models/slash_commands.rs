#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

/// Job management commands typed into the prompt box. Anything that doesn't
/// parse as a command is sent to the assistant as a regular prompt.
pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_new_job()
            || cmd.is_job_select()
            || cmd.is_rename()
            || cmd.is_pin()
            || cmd.is_delete()
            || cmd.is_job_type()
            || cmd.is_appliance()
            || cmd.is_image()
            || cmd.is_regenerate()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_new_job(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_job_select(&self) -> bool {
        return ["/j", "/job"].contains(&self.command.as_str()) && !self.args.is_empty();
    }

    pub fn is_rename(&self) -> bool {
        return ["/r", "/rename"].contains(&self.command.as_str());
    }

    pub fn is_pin(&self) -> bool {
        return ["/p", "/pin"].contains(&self.command.as_str());
    }

    pub fn is_delete(&self) -> bool {
        return ["/d", "/delete"].contains(&self.command.as_str());
    }

    pub fn is_job_type(&self) -> bool {
        return ["/t", "/type"].contains(&self.command.as_str());
    }

    pub fn is_appliance(&self) -> bool {
        return ["/a", "/appliance"].contains(&self.command.as_str());
    }

    pub fn is_image(&self) -> bool {
        return ["/i", "/image"].contains(&self.command.as_str());
    }

    pub fn is_regenerate(&self) -> bool {
        return self.command == "/regen";
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
