use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "flex flex-col items-center min-h-screen bg-gray-900 text-white",
        header { class: "flex items-center gap-3 py-6",
          h1 { class: "text-2xl font-bold tracking-tighter uppercase text-transparent bg-clip-text bg-gradient-to-r from-white to-gray-400",
            "Fitsync"
          }
        }

        // Status panel
        main { class: "p-8 bg-gray-800 rounded-lg shadow-xl w-full max-w-md",
          {children}
        }
      }
    }
}
