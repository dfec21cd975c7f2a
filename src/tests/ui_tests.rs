#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::components::Rgb;
    use crate::input::FrameInput;
    use crate::render::{RenderList, TextStyle};
    use crate::screens::ScreenId;
    use crate::tests::test_utils::{test_session, test_stack};
    use crate::ui::{self, centered_rect, window_columns, window_rows};
    use ratatui::{backend::TestBackend, layout::Rect, prelude::*};

    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 40, area);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 40);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 30);

        let shrunk = centered_rect(50, 40, Rect::new(0, 0, 20, 10));
        assert_eq!((shrunk.width, shrunk.height), (20, 10));
    }

    #[test]
    fn test_window_size_in_cells() {
        assert_eq!(window_columns(), 40);
        assert_eq!(window_rows(), 23);
    }

    #[test]
    fn test_fill_rect_maps_to_cells() {
        let mut terminal = create_test_terminal(window_columns(), window_rows());
        let mut list = RenderList::new();
        // One playfield cell: two columns, one row
        list.fill_rect(20, 20, 20, 20, Rgb::new(255, 0, 0));

        terminal.draw(|f| ui::render(f, &list)).unwrap();

        let buffer = terminal.backend().buffer();
        let red = Color::Rgb(255, 0, 0);
        assert_eq!(buffer[(2, 1)].bg, red);
        assert_eq!(buffer[(3, 1)].bg, red);
        assert_ne!(buffer[(4, 1)].bg, red);
        assert_ne!(buffer[(2, 2)].bg, red);
    }

    #[test]
    fn test_text_is_placed_and_clipped() {
        let mut terminal = create_test_terminal(window_columns(), window_rows());
        let mut list = RenderList::new();
        list.text("Hello", 100, 120, TextStyle::Normal);
        list.text("Clipped at the right edge", 350, 40, TextStyle::Title);
        list.text("Off screen", -50, 40, TextStyle::Normal);

        terminal.draw(|f| ui::render(f, &list)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(10, 6)].symbol(), "H");
        assert_eq!(buffer[(14, 6)].symbol(), "o");
        assert_eq!(buffer[(35, 2)].symbol(), "C");
        assert_eq!(buffer[(39, 2)].symbol(), "p");
        assert!(!buffer_text(&terminal).contains("Off"));
    }

    #[test]
    fn test_window_is_centered_in_larger_terminal() {
        let mut terminal = create_test_terminal(60, 33);
        let mut list = RenderList::new();
        list.fill_rect(0, 0, 10, 20, Rgb::new(0, 0, 255));

        terminal.draw(|f| ui::render(f, &list)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(10, 5)].bg, Color::Rgb(0, 0, 255));
        assert_ne!(buffer[(0, 0)].bg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_small_terminal_shows_warning() {
        let mut terminal = create_test_terminal(30, 10);
        let mut list = RenderList::new();
        list.text("Score: 0", 260, 180, TextStyle::Normal);

        terminal.draw(|f| ui::render(f, &list)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Terminal too small!"));
        assert!(!text.contains("Score"));
    }

    #[test]
    fn test_screens_render_in_terminal() {
        for top in [ScreenId::Menu, ScreenId::Play, ScreenId::Options, ScreenId::Win] {
            let mut session = test_session();
            let mut stack = test_stack(&[ScreenId::ExitConfirm, top]);
            let list = stack
                .run_frame(&mut session, &FrameInput::new(), Instant::now())
                .unwrap_or_default();
            let mut terminal = create_test_terminal(window_columns(), window_rows());

            terminal.draw(|f| ui::render(f, &list)).unwrap();

            let text = buffer_text(&terminal);
            match top {
                ScreenId::Menu => assert!(text.contains("Start (G)ame")),
                ScreenId::Play => {
                    assert!(text.contains("Score: 0"));
                    assert!(text.contains("Level: 1"));
                }
                ScreenId::Options => assert!(text.contains("(G)host piece: ON")),
                _ => assert!(text.contains("You Win!!!")),
            }
        }
    }
}
