// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Chaque événement d’édition = une opération de Saisie :
//     caractère -> ajouter, DEL/Backspace -> effacer_dernier, C/Escape -> vider, =/Enter -> calculer
// - Tactile : gros boutons ; clavier : événements texte captés globalement
//
// Note :
// - Pas de TextEdit : la Saisie est le seul tampon (pas de double état).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::CHIFFRES_MAX;
use crate::noyau::{calculer_avec, demarche, Requete, Status};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    /// Clavier physique : texte tapé + Backspace + Enter.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let touches = ui.input(|i| Touches {
            textes: i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect(),
            backspace: i.key_pressed(egui::Key::Backspace),
            enter: i.key_pressed(egui::Key::Enter),
        });
        let focus_ailleurs = ui.ctx().wants_keyboard_input();
        self.appliquer_touches(touches, focus_ailleurs);
    }

    /// `focus_ailleurs` : un widget (champ Précision en édition) a le clavier,
    /// les touches lui reviennent et la saisie n’est pas touchée.
    fn appliquer_touches(&mut self, touches: Touches, focus_ailleurs: bool) {
        if focus_ailleurs {
            return;
        }

        for t in touches.textes {
            for c in t.chars() {
                // '=' tapé au clavier vaut Enter
                if c == '=' {
                    self.eval_via_noyau();
                } else {
                    self.saisie.ajouter(c);
                }
            }
        }
        if touches.backspace {
            self.saisie.effacer_dernier();
        }
        if touches.enter {
            self.eval_via_noyau();
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");
        Self::champ_monospace(ui, "saisie_out", &self.saisie.affichage(), 1);

        ui.add_space(6.0);

        // Actions + format
        ui.horizontal(|ui| {
            // Contrat: C = saisie seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement la saisie", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.format.chiffres_significatifs() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(1..=CHIFFRES_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", '7');
                self.bouton_insert(ui, "8", '8');
                self.bouton_insert(ui, "9", '9');
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", '4');
                self.bouton_insert(ui, "5", '5');
                self.bouton_insert(ui, "6", '6');
                self.bouton_insert(ui, "÷", '/');
                ui.end_row();

                self.bouton_insert(ui, "1", '1');
                self.bouton_insert(ui, "2", '2');
                self.bouton_insert(ui, "3", '3');
                self.bouton_insert(ui, "×", '*');
                ui.end_row();

                self.bouton_insert(ui, "0", '0');
                self.bouton_insert(ui, ".", '.');
                self.bouton_insert(ui, "−", '-');
                self.bouton_insert(ui, "+", '+');
                ui.end_row();

                self.bouton_insert(ui, "(", '(');
                self.bouton_insert(ui, ")", ')');
                ui.label("");
                self.bouton_action(ui, "=", "Calculer", Action::Calculer);
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", &self.expression, 1);

        ui.add_space(6.0);

        ui.label("Résultat :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.saisie.effacer_dernier(),
                Action::Calculer => self.eval_via_noyau(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, c: char) {
        let resp = ui.add_sized([56.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.saisie.ajouter(c);
        }
    }

    /// Évalue la saisie via le noyau, puis dépose résultat/erreur/démarche dans l’état UI.
    ///
    /// Le texte est transféré dans la requête : la saisie repart vide.
    pub(crate) fn eval_via_noyau(&mut self) {
        let expression = self.saisie.affichage();
        let texte = self.saisie.prendre();
        let d = demarche(&texte);

        let reponse = calculer_avec(Requete::new(texte), &self.format);

        match reponse.status() {
            Status::SUCCESS => {
                self.set_resultat(expression, reponse.message().to_string(), d);
            }
            Status::FAILED => {
                self.set_erreur(expression, reponse.message(), d);
            }
        }
    }
}

/// Touches d’une image (frame), relevées avant toute édition.
#[derive(Debug, Default)]
struct Touches {
    textes: Vec<String>,
    backspace: bool,
    enter: bool,
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
    Calculer,
}
