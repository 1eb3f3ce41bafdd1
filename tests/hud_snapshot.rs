mod helpers;

use helpers::{buffer_lines, has_line, test_terminal};
use terminal_battle::input::ActionMenu;
use terminal_battle::render::{self, BattleView, FighterView, Prompt};

fn view<'a>(menu: &'a ActionMenu, player_health: u32, prompt: Option<Prompt<'a>>) -> BattleView<'a> {
    BattleView {
        player: FighterView {
            name: "Hero",
            health: player_health,
            max_health: 100,
        },
        enemy: FighterView {
            name: "Slime",
            health: 80,
            max_health: 80,
        },
        turn: 3,
        bar_length: 10,
        prompt: prompt.unwrap_or(Prompt::Menu(menu)),
    }
}

#[test]
fn status_panel_and_menu_snapshot() {
    let mut menu = ActionMenu::new();
    menu.down();
    let mut terminal = test_terminal(50, 16);

    terminal
        .draw(|frame| render::draw(frame, &view(&menu, 50, None)))
        .expect("render failure");
    let lines = buffer_lines(&terminal);

    assert!(has_line(&lines, "Battle Status"), "panel title missing");
    assert!(has_line(&lines, "Hero:"), "player name missing");
    assert!(
        has_line(&lines, "HP: [█████─────] 50/100"),
        "half health bar missing: {:#?}",
        lines
    );
    assert!(has_line(&lines, "HP: [██████████] 80/80"), "enemy bar missing");
    assert!(has_line(&lines, "--------------------"), "separator missing");
    assert!(has_line(&lines, "--- Turn 3 ---"), "turn header missing");
    assert!(has_line(&lines, "What will you do?"));
    assert!(has_line(&lines, "  Attack"), "unselected option should be indented");
    assert!(has_line(&lines, "> Heal"), "selection marker missing");
}

#[test]
fn empty_bar_and_narration_snapshot() {
    let menu = ActionMenu::new();
    let prompt = Prompt::Message("Slime attacks! Hero takes 10 damage.".to_string());
    let mut terminal = test_terminal(50, 16);

    terminal
        .draw(|frame| render::draw(frame, &view(&menu, 0, Some(prompt))))
        .expect("render failure");
    let lines = buffer_lines(&terminal);

    assert!(has_line(&lines, "HP: [──────────] 0/100"));
    assert!(has_line(&lines, "Slime attacks! Hero takes 10 damage."));
    assert!(has_line(&lines, "Press Enter to continue..."));
    assert!(!has_line(&lines, "What will you do?"));
}

#[test]
fn result_screen_hides_turn_header() {
    let menu = ActionMenu::new();
    let prompt = Prompt::Finished {
        message: "You defeated Slime! Victory!".to_string(),
        victory: true,
    };
    let mut terminal = test_terminal(50, 16);

    terminal
        .draw(|frame| render::draw(frame, &view(&menu, 50, Some(prompt))))
        .expect("render failure");
    let lines = buffer_lines(&terminal);

    assert!(has_line(&lines, "You defeated Slime! Victory!"));
    assert!(has_line(&lines, "Press Enter to exit"));
    assert!(!has_line(&lines, "--- Turn"));
}
