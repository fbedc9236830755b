//! 终端生命周期
//!
//! 进入 TUI 后，正常退出、出错返回、panic 都会恢复终端（raw mode / 备用屏幕）。

use std::io;

use ratatui::DefaultTerminal;

/// 离开作用域时执行恢复
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// 进入 TUI：raw mode + 备用屏幕，并安装恢复终端的 panic hook
///
/// guard 先于初始化创建，初始化中途失败也会恢复。
pub fn enter() -> io::Result<(DefaultTerminal, RestoreGuard<fn()>)> {
    let guard = RestoreGuard::new(ratatui::restore as fn());
    let terminal = ratatui::try_init()?;
    Ok((terminal, guard))
}
