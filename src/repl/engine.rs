use anyhow::anyhow;
use log::{debug, info, warn};
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Emacs, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal,
};

use crate::{
    app::state::AppState,
    command::{parser, Command, CommandResult},
    error::AppError,
    repl::{completion::CmdPromptCompleter, prompt::CmdPrompt},
};

pub struct ReplEngine {
    /// reedline 编辑器实例
    editor: Reedline,
    /// 全部数据，命令直接在上面执行
    state: AppState,
    /// 动态提示符
    prompt: CmdPrompt,
    /// 是否正在运行，用于控制循环退出
    running: bool,
}

impl ReplEngine {
    pub fn new(state: AppState) -> Self {
        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        // Tab 打开补全菜单，菜单已打开时选下一项
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let editor = Reedline::create()
            .with_completer(Box::new(CmdPromptCompleter))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        let mut prompt = CmdPrompt::default();
        prompt.refresh(&state);

        Self {
            editor,
            state,
            prompt,
            running: true,
        }
    }

    /// 运行主循环
    pub fn run(&mut self) -> Result<(), AppError> {
        while self.running {
            let sig = self
                .editor
                .read_line(&self.prompt)
                .map_err(|e| AppError::General(anyhow!("读取输入时出错: {:?}", e)))?;

            match sig {
                Signal::Success(buffer) => {
                    debug!("received line: '{}'", buffer);
                    match evaluate(&mut self.state, &buffer) {
                        Ok((cmd, result)) => {
                            println!("{result}");
                            if matches!(cmd, Command::Exit) {
                                debug!("Exit command received. Stopping REPL.");
                                self.running = false;
                            }
                        }
                        Err(e) => {
                            warn!("命令失败: {}", e);
                            eprintln!("{e}");
                        }
                    }
                    self.prompt.refresh(&self.state);
                }
                Signal::CtrlC | Signal::CtrlD => {
                    println!("Bye!");
                    self.running = false;
                }
                #[allow(unreachable_patterns)]
                other => debug!("ignored signal: {:?}", other),
            }
        }

        info!("REPL 主循环结束");
        Ok(())
    }
}

/// 解析并执行一行输入
pub fn evaluate(state: &mut AppState, line: &str) -> Result<(Command, CommandResult), AppError> {
    let cmd = parser::parse(line)?;
    debug!("Parsed command: {:?}", cmd);
    let result = cmd.execute(state)?;
    Ok((cmd, result))
}
