use crate::api::HttpProvider;
use crate::utils::*;
use clap::Args;
use game::{Board, BoardConfig, CellCoord, CellFace, GameSession, Grid, LoadError, LoadTicket};
use jeopardy_core as game;
use jeopardy_protocol::DEFAULT_BASE_URL;
use yew::prelude::*;

pub(crate) enum Msg {
    NewGame,
    Loaded(LoadTicket, Result<Board, LoadError>),
    Reveal(CellCoord),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: CellCoord,
    face: CellFace,
    callback: Callback<CellCoord>,
}

/// Glyph shown in a cell whose clue is still hidden.
const PLACEHOLDER_ICON: &str = "fas fa-question-circle";

fn cell_class(face: &CellFace) -> Classes {
    use CellFace::*;

    let state = match face {
        Placeholder => "hidden",
        Question(_) => "question",
        Answer(_) => "answer",
    };
    classes!("cell", state)
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        coords,
        face,
        callback,
    } = props.clone();

    let class = cell_class(&face);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", coords);
        callback.emit(coords);
    });

    html! {
        <td id={coords.to_string()} {class} {onclick}>
            if let Some(text) = face.text() {
                { text.to_owned() }
            } else {
                <i class={PLACEHOLDER_ICON}/>
            }
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct BoardTableProps {
    grid: Grid,
    on_reveal: Callback<CellCoord>,
}

#[function_component(BoardTable)]
fn board_table(props: &BoardTableProps) -> Html {
    let BoardTableProps { grid, on_reveal } = props;

    html! {
        <table>
            <thead>
                <tr>
                    {
                        for grid.headers.iter().map(|header| html! {
                            <th id={header.element_id()}>{ header.title.clone() }</th>
                        })
                    }
                </tr>
            </thead>
            <tbody>
                {
                    for grid.rows.iter().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|cell| html! {
                                    <CellView
                                        coords={cell.coords}
                                        face={cell.face.clone()}
                                        callback={on_reveal.clone()}
                                    />
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Number of categories across the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CATEGORIES)]
    categories: game::Ix,

    /// Number of clues in each category
    #[arg(long, default_value_t = BoardConfig::DEFAULT_QUESTIONS)]
    questions: game::Ix,

    /// Base address of the trivia API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

pub(crate) struct GameView {
    session: GameSession,
    provider: HttpProvider,
    config: BoardConfig,
    seed: Option<u64>,
    games_started: u64,
}

impl GameView {
    fn next_seed(&mut self) -> u64 {
        let seed = match self.seed {
            Some(seed) => seed.wrapping_add(self.games_started),
            None => js_random_seed(),
        };
        self.games_started = self.games_started.wrapping_add(1);
        log::debug!("seed: {}", seed);
        seed
    }

    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.session.begin_load() else {
            return false;
        };
        let config = self.config;
        let mut loader = game::BoardLoader::new(self.provider.clone(), self.next_seed());
        ctx.link().send_future(async move {
            let result = loader.load(config).await;
            Msg::Loaded(ticket, result)
        });
        true
    }

    fn status_view(&self) -> Html {
        use game::SessionState::*;

        match self.session.state() {
            Loading => html! {
                <p class="status loading"><i class="fas fa-spinner fa-spin"/>{" Loading..."}</p>
            },
            Failed(err) => {
                let retry = GameSession::RESTART_LABEL;
                let message = format!(
                    "Could not load a new board: {err}. Press {retry} to try again."
                );
                html! {
                    <p class="status error" role="alert">{ message }</p>
                }
            }
            Idle | Ready => html! {},
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = BoardConfig::new(props.categories, props.questions);
        log::debug!("board config: {:?}, api: {}", config, props.api);
        Self {
            session: GameSession::new(),
            provider: HttpProvider::new(props.api.clone()),
            config,
            seed: props.seed,
            games_started: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => self.start_game(ctx),
            Loaded(ticket, result) => self.session.finish_load(ticket, result),
            Reveal(coords) => match self.session.reveal(coords) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::warn!("cannot reveal {}: {}", coords, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let on_reveal = ctx.link().callback(Reveal);

        html! {
            <div class="jeopardy">
                <nav>
                    <button onclick={cb_new_game} disabled={self.session.is_loading()}>
                        { self.session.control_label() }
                    </button>
                </nav>
                { self.status_view() }
                <div id="table-container">
                    if let Some(grid) = self.session.grid() {
                        <BoardTable {grid} {on_reveal}/>
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        game: GameProps,
    }

    fn props(args: &[&str]) -> GameProps {
        Cli::try_parse_from(std::iter::once("jeopardy").chain(args.iter().copied()))
            .unwrap()
            .game
    }

    #[test]
    fn props_default_to_standard_board() {
        let props = props(&[]);

        assert_eq!(props.categories, 6);
        assert_eq!(props.questions, 5);
        assert_eq!(props.api, "https://jservice.io/api");
        assert_eq!(props.seed, None);
    }

    #[test]
    fn cell_class_follows_the_face() {
        let hidden = cell_class(&CellFace::Placeholder);
        let question = cell_class(&CellFace::Question("q".into()));
        let answer = cell_class(&CellFace::Answer("a".into()));

        assert!(hidden.contains("cell") && hidden.contains("hidden"));
        assert!(!hidden.contains("answer"));
        assert!(question.contains("question"));
        assert!(!question.contains("answer"));
        assert!(answer.contains("cell") && answer.contains("answer"));
        assert!(!answer.contains("hidden"));
    }

    #[test]
    fn only_placeholder_cells_lack_text() {
        assert_eq!(CellFace::Placeholder.text(), None);
        assert_eq!(CellFace::Question("q".into()).text(), Some("q"));
        assert_eq!(CellFace::Answer("a".into()).text(), Some("a"));
    }

    #[test]
    fn props_accept_overrides() {
        let props = props(&["--categories=4", "--questions", "3", "-s", "42"]);

        let config = BoardConfig::new(props.categories, props.questions);
        assert_eq!(config, BoardConfig::new(4, 3));
        assert_eq!(props.seed, Some(42));
    }
}
