mod command_runner_port;

pub use command_runner_port::CommandRunnerPort;

#[cfg(test)]
pub mod mocks {
    pub use super::command_runner_port::MockCommandRunnerPort;
}
