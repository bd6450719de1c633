//! HTML page rendering.

use maud::{html, DOCTYPE};

/// Style of the message banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Info,
    Success,
    Error,
}

impl Status {
    fn banner_class(self) -> &'static str {
        match self {
            Status::Success => "bg-green-100 text-green-700 border-green-400",
            Status::Error => "bg-red-100 text-red-700 border-red-400",
            Status::Info => "bg-blue-100 text-blue-700 border-blue-400",
        }
    }
}

/// Render the game page.
///
/// The banner is only emitted when `message` is present, and the
/// "play again" link only for [`Status::Success`]. Every interpolated value
/// is HTML-escaped.
pub fn render(message: Option<&str>, status: Status, last_guess: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Adivinhe o Número" }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="bg-gray-100 min-h-screen flex items-center justify-center" {
                div class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full text-center" {
                    h1 class="text-3xl font-bold text-gray-800 mb-2" { "Adivinhe o Número" }
                    p class="text-gray-600 mb-6" {
                        "Eu pensei em um número entre "
                        span class="font-bold" { "1 e 100" }
                        "."
                    }

                    @if let Some(message) = message {
                        div role="alert" class={ "p-4 mb-4 border rounded-lg " (status.banner_class()) } {
                            p class="font-bold" { (message) }
                        }
                    }

                    form action="/" method="POST" class="space-y-4" {
                        div {
                            input type="number" name="palpite" placeholder="Seu palpite (1-100)"
                                required min="1" max="100" value=(last_guess)
                                class="w-full px-4 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500 text-center text-lg";
                        }
                        button type="submit"
                            class="w-full bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded transition duration-200" {
                            "Enviar Palpite"
                        }
                    }

                    @if status == Status::Success {
                        div class="mt-4" {
                            a href="/" class="text-blue-500 hover:underline" { "Jogar Novamente" }
                        }
                    }
                }
            }
        }
    };

    markup.into_string()
}
