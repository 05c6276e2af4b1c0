use dotenv::dotenv;
use friends_manager::storage::Storage;
use friends_manager::{Config, FriendEntry, FriendsApp, Notice, NoticeLog, Session, Severity};
use iced::{
    widget::{button, column, container, row, scrollable, text, text_input},
    Alignment, Application, Color, Command, Element, Length, Settings, Theme,
};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let app = FriendsApp::open(&config, NoticeLog::new())?;
    FriendsGui::run(Settings::with_flags(app))?;
    Ok(())
}

#[derive(Default, Clone, Copy, PartialEq)]
enum View {
    #[default]
    Login,
    Register,
    Friends,
}

#[derive(Clone, Debug)]
enum GuiMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    NameChanged(String),
    FriendNameChanged(String),
    GenderChanged(String),
    AgeChanged(String),
    LocationChanged(String),
    Login,
    ShowRegister,
    Register,
    BackToLogin,
    AddFriend,
    RemoveFriend,
    Logout,
}

struct FriendsGui {
    app: FriendsApp<Storage, NoticeLog>,
    view: View,
    session: Option<Session>,
    name: String,
    username: String,
    password: String,
    friend_name: String,
    gender: String,
    age: String,
    location: String,
    friends: Vec<FriendEntry>,
    status: Option<Notice>,
}

impl FriendsGui {
    fn clear_forms(&mut self) {
        self.name.clear();
        self.username.clear();
        self.password.clear();
        self.clear_friend_form();
    }

    fn clear_friend_form(&mut self) {
        self.friend_name.clear();
        self.gender.clear();
        self.age.clear();
        self.location.clear();
    }

    fn refresh_friends(&mut self) {
        self.friends = match &self.session {
            Some(session) => self.app.on_list_friends(session).unwrap_or_default(),
            None => Vec::new(),
        };
    }

    fn take_notice(&mut self) {
        if let Some(notice) = self.app.notifier().last() {
            self.status = Some(notice.clone());
        }
        self.app.notifier_mut().clear();
    }

    fn status_line(&self) -> Element<GuiMessage> {
        match &self.status {
            Some(notice) => {
                let color = match notice.severity {
                    Severity::Info => Color::from_rgb(0.1, 0.5, 0.1),
                    Severity::Warning => Color::from_rgb(0.8, 0.5, 0.0),
                    Severity::Error => Color::from_rgb(0.8, 0.1, 0.1),
                };
                text(format!("{}: {}", notice.title, notice.message))
                    .size(16)
                    .style(color)
                    .into()
            }
            None => text("").size(16).into(),
        }
    }
}

impl Application for FriendsGui {
    type Executor = iced::executor::Default;
    type Message = GuiMessage;
    type Theme = Theme;
    type Flags = FriendsApp<Storage, NoticeLog>;

    fn new(app: Self::Flags) -> (Self, Command<GuiMessage>) {
        (
            FriendsGui {
                app,
                view: View::Login,
                session: None,
                name: String::new(),
                username: String::new(),
                password: String::new(),
                friend_name: String::new(),
                gender: String::new(),
                age: String::new(),
                location: String::new(),
                friends: vec![],
                status: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Friends Manager")
    }

    fn update(&mut self, message: GuiMessage) -> Command<GuiMessage> {
        match message {
            GuiMessage::UsernameChanged(username) => self.username = username,
            GuiMessage::PasswordChanged(password) => self.password = password,
            GuiMessage::NameChanged(name) => self.name = name,
            GuiMessage::FriendNameChanged(name) => self.friend_name = name,
            GuiMessage::GenderChanged(gender) => self.gender = gender,
            GuiMessage::AgeChanged(age) => self.age = age,
            GuiMessage::LocationChanged(location) => self.location = location,
            GuiMessage::Login => {
                if let Ok(session) = self.app.on_login_submit(&self.username, &self.password) {
                    self.session = Some(session);
                    self.clear_forms();
                    self.status = None;
                    self.refresh_friends();
                    self.view = View::Friends;
                }
            }
            GuiMessage::ShowRegister => {
                self.clear_forms();
                self.status = None;
                self.view = View::Register;
            }
            GuiMessage::Register => {
                let registered =
                    self.app
                        .on_register_submit(&self.name, &self.username, &self.password);
                if registered.is_ok() {
                    self.clear_forms();
                    self.view = View::Login;
                }
            }
            GuiMessage::BackToLogin => {
                self.clear_forms();
                self.status = None;
                self.view = View::Login;
            }
            GuiMessage::AddFriend => {
                if let Some(session) = &self.session {
                    let added = self.app.on_add_friend(
                        session,
                        &self.friend_name,
                        &self.gender,
                        &self.age,
                        &self.location,
                    );
                    if added.is_ok() {
                        self.clear_friend_form();
                    }
                }
                self.refresh_friends();
            }
            GuiMessage::RemoveFriend => {
                if let Some(session) = &self.session {
                    if self.app.on_remove_friend(session, &self.friend_name).is_ok() {
                        self.clear_friend_form();
                    }
                }
                self.refresh_friends();
            }
            GuiMessage::Logout => {
                if let Some(session) = self.session.take() {
                    self.app.on_logout(&session);
                }
                self.clear_forms();
                self.friends.clear();
                self.status = None;
                self.view = View::Login;
            }
        }
        self.take_notice();
        Command::none()
    }

    fn view(&self) -> Element<GuiMessage> {
        let content = match self.view {
            View::Login => column![
                text("Log In").size(30),
                text_input("Username", &self.username)
                    .on_input(GuiMessage::UsernameChanged)
                    .padding(10)
                    .width(Length::Fixed(300.0)),
                text_input("Password", &self.password)
                    .on_input(GuiMessage::PasswordChanged)
                    .on_submit(GuiMessage::Login)
                    .secure(true)
                    .padding(10)
                    .width(Length::Fixed(300.0)),
                row![
                    button("Log In").on_press(GuiMessage::Login).padding(10),
                    button("Sign Up").on_press(GuiMessage::ShowRegister).padding(10),
                ]
                .spacing(10),
                self.status_line(),
            ],
            View::Register => column![
                text("Sign Up").size(30),
                text_input("Name", &self.name)
                    .on_input(GuiMessage::NameChanged)
                    .padding(10)
                    .width(Length::Fixed(300.0)),
                text_input("Username", &self.username)
                    .on_input(GuiMessage::UsernameChanged)
                    .padding(10)
                    .width(Length::Fixed(300.0)),
                text_input("Password", &self.password)
                    .on_input(GuiMessage::PasswordChanged)
                    .secure(true)
                    .padding(10)
                    .width(Length::Fixed(300.0)),
                row![
                    button("Back").on_press(GuiMessage::BackToLogin).padding(10),
                    button("Register").on_press(GuiMessage::Register).padding(10),
                ]
                .spacing(10),
                self.status_line(),
            ],
            View::Friends => {
                let welcome = self
                    .session
                    .as_ref()
                    .map(|session| {
                        format!(
                            "Welcome, {} (logged in {})",
                            session.account.display_name,
                            session.started_label()
                        )
                    })
                    .unwrap_or_default();
                let friend_list = scrollable(
                    column(
                        self.friends
                            .iter()
                            .map(|friend| text(friend.to_string()).size(16).into())
                            .collect::<Vec<_>>(),
                    )
                    .spacing(5)
                    .padding(10)
                    .width(Length::Fill),
                )
                .height(Length::Fixed(200.0));
                column![
                    text(welcome).size(24),
                    text_input("Friend Name", &self.friend_name)
                        .on_input(GuiMessage::FriendNameChanged)
                        .padding(10)
                        .width(Length::Fixed(300.0)),
                    text_input("Gender", &self.gender)
                        .on_input(GuiMessage::GenderChanged)
                        .padding(10)
                        .width(Length::Fixed(300.0)),
                    text_input("Age", &self.age)
                        .on_input(GuiMessage::AgeChanged)
                        .padding(10)
                        .width(Length::Fixed(300.0)),
                    text_input("Location", &self.location)
                        .on_input(GuiMessage::LocationChanged)
                        .padding(10)
                        .width(Length::Fixed(300.0)),
                    row![
                        button("Add Friend").on_press(GuiMessage::AddFriend).padding(10),
                        button("Remove Friend").on_press(GuiMessage::RemoveFriend).padding(10),
                        button("Log Out").on_press(GuiMessage::Logout).padding(10),
                    ]
                    .spacing(10),
                    self.status_line(),
                    friend_list,
                ]
            }
        };

        container(content.spacing(10).align_items(Alignment::Center).padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}
