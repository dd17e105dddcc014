//! Display strings for the two supported console languages.

use clap::ValueEnum;

/// Console language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Pt => &PT,
        }
    }
}

/// Every user-facing string the shell prints.
///
/// Fields ending in `_prefix` are followed by an item name or value.
#[derive(Debug)]
pub struct Messages {
    pub menu_title: &'static str,
    pub menu_options: [&'static str; 8],
    pub menu_prompt: &'static str,
    pub invalid_option: &'static str,
    pub exiting: &'static str,

    pub name_prompt: &'static str,
    pub quantity_prompt: &'static str,
    pub category_prompt: &'static str,
    pub all_fields_required: &'static str,
    pub invalid_quantity_prefix: &'static str,
    pub item_added_prefix: &'static str,

    pub sort_prompt: &'static str,
    pub invalid_sort_prefix: &'static str,
    pub category_filter_prompt: &'static str,
    pub status_filter_prompt: &'static str,
    pub invalid_answer_prefix: &'static str,
    pub list_title: &'static str,
    pub no_items: &'static str,
    pub purchased: &'static str,
    pub not_purchased: &'static str,

    pub edit_target_prompt: &'static str,
    pub new_name_prefix: &'static str,
    pub new_quantity_prefix: &'static str,
    pub new_category_prefix: &'static str,
    pub keep_hint: &'static str,
    pub item_updated_prefix: &'static str,
    pub nothing_changed: &'static str,
    pub not_found: &'static str,

    pub remove_target_prompt: &'static str,
    pub confirm_remove_prefix: &'static str,
    pub removed: &'static str,
    pub removal_cancelled: &'static str,

    pub toggle_target_prompt: &'static str,
    pub now_marked_as: &'static str,

    pub full_list_title: &'static str,

    pub summary_title: &'static str,
    pub summary_total: &'static str,
    pub summary_purchased: &'static str,
    pub summary_unpurchased: &'static str,
    pub by_category_title: &'static str,

    pub yes_answers: &'static [&'static str],
    pub no_answers: &'static [&'static str],
}

static EN: Messages = Messages {
    menu_title: "----- Shopping List Manager -----",
    menu_options: [
        "1. Add item",
        "2. List items",
        "3. Edit item",
        "4. Remove item",
        "5. Mark item as purchased",
        "6. Show full list",
        "7. List summary",
        "0. Exit",
    ],
    menu_prompt: "Enter the number of the desired option:",
    invalid_option: "Invalid option.",
    exiting: "Exiting...",

    name_prompt: "Enter the item name:",
    quantity_prompt: "Enter the quantity:",
    category_prompt: "Enter the category:",
    all_fields_required: "All fields are required.",
    invalid_quantity_prefix: "Quantity must be a whole number, got:",
    item_added_prefix: "Item added:",

    sort_prompt: "Sort by name, category or quantity (blank for name):",
    invalid_sort_prefix: "Unknown sort key:",
    category_filter_prompt: "Filter by category (blank for all):",
    status_filter_prompt: "Filter by status: y = purchased, n = not purchased (blank for all):",
    invalid_answer_prefix: "Unrecognized answer:",
    list_title: "Shopping list:",
    no_items: "No items to show.",
    purchased: "Purchased",
    not_purchased: "Not purchased",

    edit_target_prompt: "Enter the name of the item to edit:",
    new_name_prefix: "New name for",
    new_quantity_prefix: "New quantity for",
    new_category_prefix: "New category for",
    keep_hint: "(leave blank to keep)",
    item_updated_prefix: "Item updated:",
    nothing_changed: "Nothing changed.",
    not_found: "Item not found in the list.",

    remove_target_prompt: "Enter the name of the item to remove:",
    confirm_remove_prefix: "Are you sure you want to remove (y/n)",
    removed: "Item removed!",
    removal_cancelled: "Removal cancelled.",

    toggle_target_prompt: "Enter the name of the item to mark as purchased:",
    now_marked_as: "is now marked as",

    full_list_title: "Shopping List:",

    summary_title: "Shopping list summary:",
    summary_total: "Total items",
    summary_purchased: "Purchased items",
    summary_unpurchased: "Items not purchased",
    by_category_title: "Items by category:",

    yes_answers: &["y", "yes"],
    no_answers: &["n", "no"],
};

static PT: Messages = Messages {
    menu_title: "----- Gerenciador de Lista de Compras -----",
    menu_options: [
        "1. Adicionar item",
        "2. Listar itens",
        "3. Editar item",
        "4. Remover item",
        "5. Marcar item como comprado",
        "6. Exibir lista completa",
        "7. Resumo da lista",
        "0. Sair",
    ],
    menu_prompt: "Digite o número da opção desejada:",
    invalid_option: "Opção inválida.",
    exiting: "Saindo...",

    name_prompt: "Digite o nome do item:",
    quantity_prompt: "Digite a quantidade:",
    category_prompt: "Digite a categoria:",
    all_fields_required: "Todos os campos são obrigatórios.",
    invalid_quantity_prefix: "A quantidade deve ser um número inteiro, recebido:",
    item_added_prefix: "Item adicionado:",

    sort_prompt: "Ordenar por nome, categoria ou quantidade (em branco para nome):",
    invalid_sort_prefix: "Ordenação desconhecida:",
    category_filter_prompt: "Filtrar por categoria (em branco para todas):",
    status_filter_prompt:
        "Filtrar por status: s = comprado, n = não comprado (em branco para todos):",
    invalid_answer_prefix: "Resposta não reconhecida:",
    list_title: "Lista de compras:",
    no_items: "Nenhum item para exibir.",
    purchased: "Comprado",
    not_purchased: "Não comprado",

    edit_target_prompt: "Digite o nome do item que deseja editar:",
    new_name_prefix: "Novo nome para",
    new_quantity_prefix: "Nova quantidade para",
    new_category_prefix: "Nova categoria para",
    keep_hint: "(deixe em branco para manter)",
    item_updated_prefix: "Item editado:",
    nothing_changed: "Nada foi alterado.",
    not_found: "Item não encontrado na lista.",

    remove_target_prompt: "Digite o nome do item que deseja remover:",
    confirm_remove_prefix: "Tem certeza que deseja remover (s/n)",
    removed: "Item removido!",
    removal_cancelled: "Remoção cancelada.",

    toggle_target_prompt: "Digite o nome do item que deseja marcar como comprado:",
    now_marked_as: "foi marcado como",

    full_list_title: "Lista de Compras:",

    summary_title: "Resumo da Lista de Compras:",
    summary_total: "Total de itens",
    summary_purchased: "Itens comprados",
    summary_unpurchased: "Itens não comprados",
    by_category_title: "Itens por categoria:",

    yes_answers: &["s", "sim", "y", "yes"],
    no_answers: &["n", "nao", "não", "no"],
};
